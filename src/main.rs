//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_verify` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Echoing the change set to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_verify::initialization::init_logger_with;
use dns_verify::{run_verification, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Missing required flags exit here, before any network activity
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_verification(config).await {
        Ok(report) => {
            print!("{}", report.rendered);
            log::info!("Change set saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_verify error: {:#}", e);
            process::exit(1);
        }
    }
}
