//! Per-run memo of resolved package versions
//!
//! Keys are bare package names (extras already stripped). The map lives for
//! one rewrite and is owned by the caller, so every distinct name reaches
//! the resolver at most once.

use crate::domain::Version;
use crate::error::RegistryError;
use crate::registry::VersionResolver;
use std::collections::HashMap;

/// Versions already resolved during the current run
#[derive(Debug, Default)]
pub struct KnownVersions {
    versions: HashMap<String, Version>,
    lookups: usize,
}

impl KnownVersions {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously resolved version
    pub fn get(&self, package: &str) -> Option<&Version> {
        self.versions.get(package)
    }

    /// Record a resolved version, replacing any previous entry
    pub fn insert(&mut self, package: impl Into<String>, version: Version) {
        self.versions.insert(package.into(), version);
    }

    /// Return the cached version, or ask the resolver and remember the answer
    pub async fn resolve(
        &mut self,
        package: &str,
        resolver: &dyn VersionResolver,
    ) -> Result<Version, RegistryError> {
        if let Some(version) = self.get(package) {
            log::info!("Using known version for {}", package);
            return Ok(version.clone());
        }

        log::info!("Fetching new version for {}", package);
        self.lookups += 1;
        let version = resolver.latest_version(package).await?;
        log::debug!(
            "{} reports {} {} (next major {})",
            resolver.registry_name(),
            package,
            version,
            version.next_major()
        );
        self.versions.insert(package.to_string(), version.clone());
        Ok(version)
    }

    /// Number of resolver calls made through this map
    pub fn lookups(&self) -> usize {
        self.lookups
    }
}
