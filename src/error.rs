//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RegistryError: Issues with package registry communication
//! - InstallError: Issues with running the package manager install command
//!
//! Nothing in this crate treats these as fatal: the checker recovers a
//! RegistryError into a `CheckFailed` decision and the installer surfaces an
//! InstallError as a warning with manual-retry instructions.

use thiserror::Error;

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network request failed before a response arrived
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Request timed out
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// Response arrived but could not be decoded
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },
}

/// Errors related to running the install command
#[derive(Error, Debug)]
pub enum InstallError {
    /// The command ran but exited with a non-zero status
    #[error("install command failed with {status}: {command}")]
    CommandFailed { command: String, status: String },

    /// The command could not be spawned at all
    #[error("failed to run install command '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }
}

impl InstallError {
    /// Creates a new CommandFailed error
    pub fn command_failed(command: impl Into<String>, status: impl Into<String>) -> Self {
        InstallError::CommandFailed {
            command: command.into(),
            status: status.into(),
        }
    }

    /// Creates a new SpawnFailed error
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        InstallError::SpawnFailed {
            command: command.into(),
            source,
        }
    }
}
