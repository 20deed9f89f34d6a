//! Core domain models for boundbump
//!
//! This module contains:
//! - Release versions as published by the package index
//! - The per-run map of already resolved versions

mod known_versions;
mod version;

pub use known_versions::KnownVersions;
pub use version::Version;
