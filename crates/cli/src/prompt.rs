//! Interactive prompts

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::errors::CliError;

/// Asks questions on `output` and reads one-line answers from `input`.
#[derive(Debug)]
pub(crate) struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` and return the trimmed answer.
    pub(crate) fn ask(&mut self, question: &str) -> Result<String, CliError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }

        Ok(line.trim().to_string())
    }

    /// Ask `question` and parse the answer as a number.
    pub(crate) fn ask_decimal(&mut self, question: &str) -> Result<Decimal, CliError> {
        parse_decimal(&self.ask(question)?)
    }
}

/// Parse a plain or scientific-notation number.
pub(crate) fn parse_decimal(s: &str) -> Result<Decimal, CliError> {
    let trimmed = s.trim();

    trimmed
        .parse::<Decimal>()
        .or_else(|_err| Decimal::from_scientific(trimmed))
        .map_err(|_err| CliError::InvalidNumber(s.to_string()))
}
