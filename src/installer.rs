//! Package manager integration for installing the published update
//!
//! This module provides:
//! - Detection of the package manager that installed the CLI
//! - Global-install command construction
//! - Blocking execution with inherited stdio, so the user sees live
//!   installer output
//!
//! Install failure is never fatal: it is surfaced as a warning naming the
//! exact command for a manual retry.

use crate::error::InstallError;
use colored::Colorize;
use std::process::Command;

/// Package managers that can globally install the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable name of the package manager
    pub fn command_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Detect the package manager that invoked the current process
    pub fn detect() -> Self {
        Self::from_user_agent(std::env::var("npm_config_user_agent").ok().as_deref())
    }

    /// Detect from an `npm_config_user_agent` value, defaulting to npm
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(user_agent) = user_agent else {
            return PackageManager::Npm;
        };

        if user_agent.starts_with("yarn") {
            PackageManager::Yarn
        } else if user_agent.starts_with("pnpm") {
            PackageManager::Pnpm
        } else if user_agent.starts_with("bun") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }
}

/// Build the global-install argv for a package specifier
pub fn global_install_command(pm: PackageManager, package_spec: &str) -> Vec<String> {
    let parts: Vec<&str> = match pm {
        PackageManager::Npm => vec!["npm", "install", "-g"],
        PackageManager::Yarn => vec!["yarn", "global", "add"],
        PackageManager::Pnpm => vec!["pnpm", "add", "-g"],
        PackageManager::Bun => vec!["bun", "add", "-g"],
    };

    let mut command: Vec<String> = parts.into_iter().map(String::from).collect();
    command.push(package_spec.to_string());
    command
}

/// Trait for running the install command
pub trait InstallRunner: Send + Sync {
    /// Run the command to completion, inheriting the host's streams
    fn run_install(&self, command: &[String]) -> Result<(), InstallError>;
}

/// Install runner that executes the real command
#[derive(Debug, Default)]
pub struct SystemInstaller;

impl SystemInstaller {
    /// Create a new system installer
    pub fn new() -> Self {
        Self
    }
}

impl InstallRunner for SystemInstaller {
    fn run_install(&self, command: &[String]) -> Result<(), InstallError> {
        let command_str = command.join(" ");
        if command.is_empty() {
            return Err(InstallError::spawn_failed(
                command_str,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            ));
        }

        // stdio is inherited by default with status(), so installer output
        // goes straight to the user's terminal.
        let status = Command::new(&command[0])
            .args(&command[1..])
            .status()
            .map_err(|e| InstallError::spawn_failed(command_str.clone(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::command_failed(command_str, status.to_string()))
        }
    }
}

/// Build and run the global install for the given package specifier.
///
/// Reports the outcome on the terminal; the returned Result is informational
/// and must not be treated as fatal by callers.
pub fn perform_update(
    runner: &dyn InstallRunner,
    pm: PackageManager,
    package_spec: &str,
) -> Result<(), InstallError> {
    let command = global_install_command(pm, package_spec);
    let command_str = command.join(" ");

    println!("Updating tsci using: {}", command_str);
    match runner.run_install(&command) {
        Ok(()) => {
            println!("{}", "tsci has been updated successfully!".green());
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{}",
                "Update failed. You can try updating manually by running:".yellow()
            );
            eprintln!("  {}", command_str);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock install runner that records invocations
    struct MockInstaller {
        should_succeed: bool,
        calls: AtomicUsize,
    }

    impl MockInstaller {
        fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl InstallRunner for MockInstaller {
        fn run_install(&self, command: &[String]) -> Result<(), InstallError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.should_succeed {
                Ok(())
            } else {
                Err(InstallError::command_failed(
                    command.join(" "),
                    "exit code: 1",
                ))
            }
        }
    }

    #[test]
    fn test_detect_from_user_agent_yarn() {
        let ua = Some("yarn/1.22.19 npm/? node/v18.16.0 darwin x64");
        assert_eq!(PackageManager::from_user_agent(ua), PackageManager::Yarn);
    }

    #[test]
    fn test_detect_from_user_agent_pnpm() {
        let ua = Some("pnpm/8.6.0 npm/? node/v18.16.0 linux x64");
        assert_eq!(PackageManager::from_user_agent(ua), PackageManager::Pnpm);
    }

    #[test]
    fn test_detect_from_user_agent_bun() {
        let ua = Some("bun/1.0.0 npm/? node/v18.16.0 linux x64");
        assert_eq!(PackageManager::from_user_agent(ua), PackageManager::Bun);
    }

    #[test]
    fn test_detect_from_user_agent_npm() {
        let ua = Some("npm/9.5.1 node/v18.16.0 linux x64 workspaces/false");
        assert_eq!(PackageManager::from_user_agent(ua), PackageManager::Npm);
    }

    #[test]
    fn test_detect_defaults_to_npm() {
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
    }

    #[test]
    fn test_global_install_command_npm() {
        let cmd = global_install_command(PackageManager::Npm, "@tscircuit/cli@latest");
        assert_eq!(cmd, vec!["npm", "install", "-g", "@tscircuit/cli@latest"]);
    }

    #[test]
    fn test_global_install_command_yarn() {
        let cmd = global_install_command(PackageManager::Yarn, "@tscircuit/cli@latest");
        assert_eq!(cmd, vec!["yarn", "global", "add", "@tscircuit/cli@latest"]);
    }

    #[test]
    fn test_global_install_command_pnpm() {
        let cmd = global_install_command(PackageManager::Pnpm, "@tscircuit/cli@latest");
        assert_eq!(cmd, vec!["pnpm", "add", "-g", "@tscircuit/cli@latest"]);
    }

    #[test]
    fn test_global_install_command_bun() {
        let cmd = global_install_command(PackageManager::Bun, "@tscircuit/cli@latest");
        assert_eq!(cmd, vec!["bun", "add", "-g", "@tscircuit/cli@latest"]);
    }

    #[test]
    fn test_perform_update_success() {
        let runner = MockInstaller::new(true);
        let result = perform_update(&runner, PackageManager::Npm, "@tscircuit/cli@latest");
        assert!(result.is_ok());
        assert_eq!(runner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_perform_update_failure_is_recovered() {
        let runner = MockInstaller::new(false);
        let result = perform_update(&runner, PackageManager::Npm, "@tscircuit/cli@latest");
        assert!(result.is_err());
        assert_eq!(runner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_system_installer_spawn_failure() {
        let installer = SystemInstaller::new();
        let command = vec![
            "definitely-not-a-real-package-manager-xyz".to_string(),
            "install".to_string(),
        ];
        let result = installer.run_install(&command);
        assert!(matches!(result, Err(InstallError::SpawnFailed { .. })));
    }

    #[test]
    fn test_system_installer_empty_command() {
        let installer = SystemInstaller::new();
        let result = installer.run_install(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_name() {
        assert_eq!(PackageManager::Npm.command_name(), "npm");
        assert_eq!(PackageManager::Yarn.command_name(), "yarn");
        assert_eq!(PackageManager::Pnpm.command_name(), "pnpm");
        assert_eq!(PackageManager::Bun.command_name(), "bun");
    }
}
