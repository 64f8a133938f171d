//! Money display

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{BDT, Currency, EUR, GBP, USD},
};

use crate::errors::CliError;

/// Resolve a supported ISO currency code, case-insensitively.
pub(crate) fn currency(code: &str) -> Result<&'static Currency, CliError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "BDT" => Ok(BDT),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        _ => Err(CliError::UnknownCurrency(code.to_string())),
    }
}

/// Format `amount` in `currency`, rounded half away from zero to minor units.
pub(crate) fn format_amount(amount: Decimal, currency: &'static Currency) -> Result<String, CliError> {
    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .ok_or(CliError::AmountOutOfRange(amount))?;

    Ok(Money::from_minor(minor_units, currency).to_string())
}
