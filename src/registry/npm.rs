//! npm Registry adapter
//!
//! Fetches the latest published version of a package from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}/latest

use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// npm registry base URL
const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmAdapter {
    client: HttpClient,
    base_url: String,
}

/// npm `{package}/latest` dist-tag response
#[derive(Debug, Deserialize)]
struct LatestDistTag {
    /// Version string of the latest dist-tag, absent on malformed responses
    version: Option<String>,
}

impl NpmAdapter {
    /// Create a new npm adapter
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: NPM_REGISTRY_URL.to_string(),
        }
    }

    /// Override the registry base URL (for testing)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the latest-dist-tag URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/latest", self.base_url, package)
    }
}

#[async_trait]
impl RegistryAdapter for NpmAdapter {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError> {
        let url = self.build_url(package);
        let response = self.client.get(&url, package, self.registry_name()).await?;

        // HTTP error responses are non-throwing: an unpublished package or a
        // registry hiccup means "no version found", not a failure to raise.
        if !response.status().is_success() {
            return Ok(None);
        }

        let body: LatestDistTag = response.json().await.map_err(|e| {
            RegistryError::invalid_response(
                package,
                self.registry_name(),
                format!("failed to parse JSON: {}", e),
            )
        })?;

        Ok(body.version.filter(|v| !v.is_empty()))
    }
}
