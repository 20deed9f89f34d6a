//! Package index access
//!
//! This module provides:
//! - HTTP client shared foundation
//! - PyPI JSON API adapter
//! - The resolver trait the rewriter depends on

mod client;
mod pypi;
#[cfg(test)]
mod test_server;

pub use client::HttpClient;
pub use pypi::PyPIAdapter;

use crate::domain::Version;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Resolves the latest published version of a package
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version for a bare package name
    async fn latest_version(&self, package: &str) -> Result<Version, RegistryError>;
}
