//! Registry adapters for fetching the latest published version
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm Registry adapter

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::NpmAdapter;

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version for a package.
    ///
    /// `Ok(None)` means the registry answered but no usable version exists
    /// (non-2xx status, or a response without a non-empty version field).
    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError>;
}
