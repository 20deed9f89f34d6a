//! CLI argument parsing module for boundbump

use clap::Parser;
use std::path::PathBuf;

/// Bump dependency floors to the latest release and ceilings to the next major
#[derive(Parser, Debug, Clone)]
#[command(
    name = "boundbump",
    version,
    about = "Rewrite dependency constraints to >=latest,<next-major"
)]
pub struct CliArgs {
    /// Manifest file to rewrite in place
    pub file: PathBuf,
}
