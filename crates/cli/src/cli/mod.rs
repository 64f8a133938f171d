use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use crate::{config::LoggingConfig, errors::CliError};

mod calculate;
mod list;

#[derive(Debug, Parser)]
#[command(
    name = "pricewise",
    about = "Apply a configured discount to an amount",
    long_about = None,
    version
)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply a discount to an amount, prompting for anything not given
    Calculate(calculate::CalculateArgs),

    /// Show the configured discount types
    List(list::ListArgs),
}

impl Cli {
    pub(crate) fn run(self, input: impl BufRead, output: impl Write) -> Result<(), CliError> {
        match self.command {
            Commands::Calculate(args) => calculate::run(&args, input, output),
            Commands::List(args) => list::run(&args, output),
        }
    }
}
