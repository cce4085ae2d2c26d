//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `product_links` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use product_links::config::{Cli, Command};
use product_links::initialization::init_logger_with;
use product_links::{platform_links, run_check, start_server, CheckConfig, ServeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Check(args) => run_check(CheckConfig::from(args)).await.map(|report| {
            // Results go to stdout when no output file is given, so the summary goes to stderr
            eprintln!(
                "✅ Checked {} product URL{} ({} valid, {} replaced, {} invalid) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.valid,
                report.replaced,
                report.invalid,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
        }),
        Command::Serve(args) => start_server(ServeConfig::from(args)).await,
        Command::Links(args) => {
            let links = platform_links(&args.title, args.group.platforms());
            serde_json::to_string_pretty(&links)
                .context("Failed to serialize links")
                .map(|rendered| println!("{rendered}"))
        }
    };

    if let Err(e) = outcome {
        eprintln!("product_links error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
