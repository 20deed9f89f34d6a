//! boundbump - dependency floor and ceiling bumper
//!
//! Usage: `boundbump <file>`

use boundbump::cli::CliArgs;
use boundbump::manifest::ManifestRewriter;
use boundbump::registry::{HttpClient, PyPIAdapter};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("BOUNDBUMP_LOG", "info"))
        .format_timestamp(None)
        .init();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let client = HttpClient::new()?;
    let index = PyPIAdapter::new(client);

    let report = ManifestRewriter::new(&index)
        .rewrite_file(&args.file)
        .await?;

    println!(
        "{} {} of {} lines in {} ({} {})",
        "Rewrote".green().bold(),
        report.rewritten.to_string().bold(),
        report.total_lines,
        report.path.display().to_string().cyan(),
        report.lookups,
        if report.lookups == 1 {
            "lookup"
        } else {
            "lookups"
        }
    );

    Ok(())
}
