//! Pricewise CLI
//!
//! Reads an amount and a discount type, from flags or interactively, and
//! prints the amount after the configured discount.

use std::{io, process::ExitCode};

use clap::Parser;
use tracing::debug;

use crate::{cli::Cli, errors::report};

mod cli;
mod config;
mod errors;
mod money;
mod observability;
mod prompt;

#[expect(clippy::print_stderr, reason = "errors are reported on stderr")]
fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init(&cli.logging) {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }

    match cli.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(?error, "discount request failed");

            // Nowhere left to report to if stderr itself fails
            _ = report(&error, io::stderr().lock());

            ExitCode::FAILURE
        }
    }
}
