//! Manifest reading, rewriting and writing
//!
//! This module provides:
//! - Dependency line recognition and constraint construction
//! - In-memory and in-place manifest rewriting
//! - Whole-file read and write helpers

mod dependency_line;
mod rewriter;

pub use dependency_line::{Constraint, DependencyLine};
pub use rewriter::{LineChange, ManifestRewriter, Rewrite, RewriteReport};

use crate::error::ManifestError;
use std::fs;
use std::path::Path;

/// Read a manifest file content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Write content to a manifest file, replacing it entirely
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
