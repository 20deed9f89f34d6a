//! Manifest rewriting
//!
//! The whole manifest is read into memory, every dependency line gets a
//! fresh constraint, and the result is written back in a single write once
//! every lookup has succeeded. A failed lookup leaves the file untouched.

use crate::domain::KnownVersions;
use crate::error::{AppError, RegistryError};
use crate::manifest::{read_manifest, write_manifest, Constraint, DependencyLine};
use crate::registry::VersionResolver;
use std::path::{Path, PathBuf};

/// One rewritten dependency line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number in the manifest
    pub line_number: usize,
    /// Package spec as written, extras included
    pub package: String,
    /// Constraint before the rewrite
    pub old_constraint: String,
    /// Constraint after the rewrite
    pub new_constraint: String,
}

/// Result of rewriting manifest content in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The complete new content
    pub content: String,
    /// Total number of lines seen
    pub total_lines: usize,
    /// Dependency lines that were rewritten, in file order
    pub changes: Vec<LineChange>,
}

/// Summary of rewriting a manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub total_lines: usize,
    pub rewritten: usize,
    /// Distinct packages looked up in the index
    pub lookups: usize,
}

/// Rewrites dependency constraints using a version resolver
pub struct ManifestRewriter<'a> {
    resolver: &'a dyn VersionResolver,
}

impl<'a> ManifestRewriter<'a> {
    /// Create a rewriter backed by `resolver`
    pub fn new(resolver: &'a dyn VersionResolver) -> Self {
        Self { resolver }
    }

    /// Rewrite manifest content, resolving versions through `known`
    ///
    /// Unmatched lines are copied as is. Rewritten lines are emitted in the
    /// fixed `  "<spec> <constraint>",` layout and keep their own `\r\n` or
    /// `\n` terminator.
    pub async fn rewrite(
        &self,
        content: &str,
        known: &mut KnownVersions,
    ) -> Result<Rewrite, RegistryError> {
        let mut output = String::with_capacity(content.len());
        let mut changes = Vec::new();
        let mut total_lines = 0;

        for (idx, line) in content.split_inclusive('\n').enumerate() {
            total_lines += 1;

            let Some(dependency) = DependencyLine::parse(line) else {
                output.push_str(line);
                continue;
            };

            let version = known
                .resolve(dependency.bare_name(), self.resolver)
                .await?;
            let constraint = Constraint::bumped(&version, &dependency);
            log::debug!(
                "line {}: {} {} -> {}",
                idx + 1,
                dependency.package(),
                dependency.constraint(),
                constraint
            );

            output.push_str(&dependency.render(&constraint));
            changes.push(LineChange {
                line_number: idx + 1,
                package: dependency.package().to_string(),
                old_constraint: dependency.constraint().to_string(),
                new_constraint: constraint.to_string(),
            });
        }

        Ok(Rewrite {
            content: output,
            total_lines,
            changes,
        })
    }

    /// Rewrite the manifest at `path` in place
    pub async fn rewrite_file(&self, path: &Path) -> Result<RewriteReport, AppError> {
        let content = read_manifest(path)?;
        let mut known = KnownVersions::new();

        let rewrite = self.rewrite(&content, &mut known).await?;
        write_manifest(path, &rewrite.content)?;
        log::debug!(
            "wrote {} ({} of {} lines rewritten)",
            path.display(),
            rewrite.changes.len(),
            rewrite.total_lines
        );

        Ok(RewriteReport {
            path: path.to_path_buf(),
            total_lines: rewrite.total_lines,
            rewritten: rewrite.changes.len(),
            lookups: known.lookups(),
        })
    }
}
