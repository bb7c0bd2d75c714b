//! sitechain - Main Entry Point
//!
//! Parses arguments, sets up logging and runs the site generation pipeline
//! once. The written path goes to stdout; errors go to stderr.

use clap::Parser;
use sitechain::cli::{exit_status, run, Cli};
use sitechain::observability::init_default_logging;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_default_logging(cli.verbose);

    info!("Starting sitechain v{}", env!("CARGO_PKG_VERSION"));

    let result = run(&cli).await;
    match &result {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            let message = e.redacted();
            error!(kind = ?e.kind(), "Site generation failed: {}", message);
            eprintln!("Error: {message}");
        }
    }

    ExitCode::from(exit_status(&result))
}
