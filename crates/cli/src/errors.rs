//! CLI errors

use std::io::{self, Write};

use pricewise::{config::ConfigError, factory::FactoryError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors reported to the user by the CLI.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Discount construction failed.
    #[error(transparent)]
    Factory(#[from] FactoryError),

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The discount type is not one the CLI knows how to ask for.
    #[error("invalid discount type `{0}`; expected percentage, fixed, bulk or seasonal")]
    InvalidType(String),

    /// Input could not be read as a number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Input ended before a prompt was answered.
    #[error("no input provided")]
    EndOfInput,

    /// The display currency is not supported.
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),

    /// The result does not fit in the display currency's minor units.
    #[error("amount cannot be displayed: {0}")]
    AmountOutOfRange(Decimal),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write the single user-facing line for a failed request.
pub(crate) fn report(error: &CliError, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Error: {error}")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn report_writes_one_line() -> TestResult {
        let mut output = Vec::new();

        report(&CliError::InvalidType("loyalty".to_string()), &mut output)?;

        let written = String::from_utf8(output)?;

        assert_eq!(
            written,
            "Error: invalid discount type `loyalty`; expected percentage, fixed, bulk or seasonal\n"
        );
        assert_eq!(written.lines().count(), 1);

        Ok(())
    }
}
