//! Current version resolution
//!
//! The version the checker compares against comes from, in order:
//! 1. An injected provider exposing the hosting CLI's own version string
//! 2. The packaged baseline version with the patch level incremented
//! 3. The raw packaged baseline, verbatim
//!
//! Resolution never fails. An unparsable baseline falls through to (3) so a
//! broken build metadata string degrades to a best-effort comparison instead
//! of an error.

use semver::Version;

/// Baseline version embedded at build time
const BASELINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capability exposing the hosting program's own version string
pub trait VersionProvider: Send + Sync {
    /// The version the hosting CLI reports for itself, if it knows one
    fn version(&self) -> Option<String>;
}

/// Resolves the current version of the tool being update-checked
pub struct VersionResolver {
    /// Optional hosting-program version source
    provider: Option<Box<dyn VersionProvider>>,
    /// Fallback version embedded at packaging time
    baseline: String,
}

impl VersionResolver {
    /// Create a resolver backed only by the packaged baseline
    pub fn new() -> Self {
        Self {
            provider: None,
            baseline: BASELINE_VERSION.to_string(),
        }
    }

    /// Attach a hosting-program version provider
    pub fn with_provider(mut self, provider: Box<dyn VersionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Override the packaged baseline (for testing)
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Resolve the current version, first success wins
    pub fn resolve(&self) -> String {
        if let Some(provider) = &self.provider {
            if let Some(version) = provider.version() {
                if !version.is_empty() {
                    return version;
                }
            }
        }

        bump_patch(&self.baseline).unwrap_or_else(|| self.baseline.clone())
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Patch-increment a semver string the way node-semver's `inc(v, "patch")`
/// does: a prerelease is released as-is (prerelease cleared, patch kept),
/// a plain release gets its patch level incremented. Build metadata is
/// dropped either way. Returns None if the input does not parse.
pub fn bump_patch(version: &str) -> Option<String> {
    let parsed = Version::parse(version).ok()?;
    let patch = if parsed.pre.is_empty() {
        parsed.patch + 1
    } else {
        parsed.patch
    };
    let bumped = Version::new(parsed.major, parsed.minor, patch);
    Some(bumped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Option<String>);

    impl VersionProvider for FixedProvider {
        fn version(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_bump_patch() {
        assert_eq!(bump_patch("1.2.3"), Some("1.2.4".to_string()));
        assert_eq!(bump_patch("0.0.0"), Some("0.0.1".to_string()));
    }

    #[test]
    fn test_bump_patch_releases_prerelease_without_increment() {
        assert_eq!(bump_patch("1.2.3-beta.1"), Some("1.2.3".to_string()));
        assert_eq!(bump_patch("2.0.0-rc.1"), Some("2.0.0".to_string()));
    }

    #[test]
    fn test_bump_patch_drops_build_metadata() {
        assert_eq!(bump_patch("1.2.3+build.7"), Some("1.2.4".to_string()));
    }

    #[test]
    fn test_bump_patch_invalid() {
        assert_eq!(bump_patch("not-a-version"), None);
        assert_eq!(bump_patch(""), None);
    }

    #[test]
    fn test_resolve_prefers_provider() {
        let resolver = VersionResolver::new()
            .with_provider(Box::new(FixedProvider(Some("9.9.9".to_string()))))
            .with_baseline("1.0.0");
        assert_eq!(resolver.resolve(), "9.9.9");
    }

    #[test]
    fn test_resolve_ignores_empty_provider_version() {
        let resolver = VersionResolver::new()
            .with_provider(Box::new(FixedProvider(Some(String::new()))))
            .with_baseline("1.0.0");
        assert_eq!(resolver.resolve(), "1.0.1");
    }

    #[test]
    fn test_resolve_falls_back_to_bumped_baseline() {
        let resolver = VersionResolver::new()
            .with_provider(Box::new(FixedProvider(None)))
            .with_baseline("1.2.3");
        assert_eq!(resolver.resolve(), "1.2.4");
    }

    #[test]
    fn test_resolve_without_provider() {
        let resolver = VersionResolver::new().with_baseline("2.0.0");
        assert_eq!(resolver.resolve(), "2.0.1");
    }

    #[test]
    fn test_resolve_prerelease_baseline_releases_it() {
        // A prerelease baseline resolves to the release it precedes, not to
        // the patch after it; only versions past 1.3.0 count as updates.
        let resolver = VersionResolver::new().with_baseline("1.3.0-beta.2");
        assert_eq!(resolver.resolve(), "1.3.0");
    }

    #[test]
    fn test_resolve_unparsable_baseline_verbatim() {
        let resolver = VersionResolver::new().with_baseline("next");
        assert_eq!(resolver.resolve(), "next");
    }

    #[test]
    fn test_default_resolver_uses_packaged_baseline() {
        let resolver = VersionResolver::default();
        // The packaged baseline parses, so resolve() returns it bumped.
        assert_eq!(
            resolver.resolve(),
            bump_patch(BASELINE_VERSION).unwrap()
        );
    }
}
