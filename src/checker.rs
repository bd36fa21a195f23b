//! Update check orchestration
//!
//! This module coordinates the whole advisory flow:
//! resolve current version → fetch latest → compare → prompt → install.
//!
//! Every failure degrades to "no update performed"; the checker never
//! terminates the hosting process.

use crate::installer::{perform_update, InstallRunner, PackageManager, SystemInstaller};
use crate::progress::Progress;
use crate::prompt::{Confirmer, TerminalPrompt};
use crate::registry::{HttpClient, NpmAdapter, RegistryAdapter};
use crate::version::VersionResolver;
use semver::Version;

/// Environment variable that disables the update check entirely
pub const SKIP_ENV_VAR: &str = "TSCI_SKIP_CLI_UPDATE";

/// Package whose published version is checked
pub const DEFAULT_PACKAGE: &str = "@tscircuit/cli";

/// Outcome of a single update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDecision {
    /// The latest published version is not newer than the current one
    NoUpdateAvailable,
    /// A strictly newer version is published
    UpdateAvailable { current: String, latest: String },
    /// The skip environment variable was set; no network access happened
    SkippedByEnvironment,
    /// The registry could not be reached or returned no usable version
    CheckFailed,
}

/// Coordinates the check → prompt → install flow
pub struct UpdateChecker {
    /// Package queried on the registry
    package: String,
    /// Registry the latest version is fetched from
    registry: Box<dyn RegistryAdapter>,
    /// Source of the tool's own current version
    resolver: VersionResolver,
    /// Asks the user whether to update
    confirmer: Box<dyn Confirmer>,
    /// Runs the install command
    installer: Box<dyn InstallRunner>,
    /// Package manager used for the global install
    package_manager: PackageManager,
    /// Skip variable value captured at construction
    skip_value: Option<String>,
    /// Suppress the spinner
    quiet: bool,
}

impl UpdateChecker {
    /// Create a checker wired with the real npm registry, terminal prompt
    /// and system installer
    pub fn new() -> Result<Self, crate::error::RegistryError> {
        let client = HttpClient::new()?;
        Ok(Self::with_registry(Box::new(NpmAdapter::new(client))))
    }

    /// Create a checker around a specific registry adapter
    pub fn with_registry(registry: Box<dyn RegistryAdapter>) -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            registry,
            resolver: VersionResolver::new(),
            confirmer: Box::new(TerminalPrompt::new()),
            installer: Box::new(SystemInstaller::new()),
            package_manager: PackageManager::detect(),
            skip_value: std::env::var(SKIP_ENV_VAR).ok(),
            quiet: false,
        }
    }

    /// Override the package to check
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Override the current-version resolver
    pub fn with_resolver(mut self, resolver: VersionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Override the confirmer (for testing or `--yes` flows)
    pub fn with_confirmer(mut self, confirmer: Box<dyn Confirmer>) -> Self {
        self.confirmer = confirmer;
        self
    }

    /// Override the install runner (for testing)
    pub fn with_installer(mut self, installer: Box<dyn InstallRunner>) -> Self {
        self.installer = installer;
        self
    }

    /// Override the detected package manager
    pub fn with_package_manager(mut self, pm: PackageManager) -> Self {
        self.package_manager = pm;
        self
    }

    /// Override the captured skip-variable value (for testing)
    pub fn with_skip_value(mut self, value: Option<String>) -> Self {
        self.skip_value = value;
        self
    }

    /// Suppress spinner output
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Decide whether an update is available, without prompting or installing
    pub async fn check(&self) -> UpdateDecision {
        if self.skip_value.as_deref() == Some("true") {
            return UpdateDecision::SkippedByEnvironment;
        }

        let mut progress = Progress::new(!self.quiet);
        progress.spinner("Checking for updates...");
        let fetched = self.registry.latest_version(&self.package).await;
        progress.finish_and_clear();

        let latest = match fetched {
            Ok(Some(version)) => version,
            // A registry hiccup is "no version found", never a user-visible error
            Ok(None) | Err(_) => return UpdateDecision::CheckFailed,
        };

        let Ok(latest_version) = Version::parse(&latest) else {
            return UpdateDecision::CheckFailed;
        };

        let current = self.resolver.resolve();
        let Ok(current_version) = Version::parse(&current) else {
            // An unparsable current version cannot be proven out of date
            return UpdateDecision::NoUpdateAvailable;
        };

        if latest_version > current_version {
            UpdateDecision::UpdateAvailable { current, latest }
        } else {
            UpdateDecision::NoUpdateAvailable
        }
    }

    /// Run the full flow and report the decision it acted on: check, prompt
    /// on a newer version, install on an affirmative answer.
    pub async fn run_for_decision(&self) -> UpdateDecision {
        let decision = self.check().await;

        if let UpdateDecision::UpdateAvailable { current, latest } = &decision {
            let question = format!(
                "A new version of tsci is available ({} → {}).\nWould you like to update now?",
                current, latest
            );

            if self.confirmer.confirm(&question).await {
                let package_spec = format!("{}@latest", self.package);
                // Best-effort: the warning has already been printed on failure
                let _ =
                    perform_update(self.installer.as_ref(), self.package_manager, &package_spec);
            }
        }

        decision
    }

    /// Run the full flow.
    ///
    /// Returns `true` iff an update was available, regardless of the user's
    /// answer and the install outcome. Callers who need to distinguish
    /// skip/failure should use [`UpdateChecker::check`] or
    /// [`UpdateChecker::run_for_decision`].
    pub async fn run(&self) -> bool {
        matches!(
            self.run_for_decision().await,
            UpdateDecision::UpdateAvailable { .. }
        )
    }
}
