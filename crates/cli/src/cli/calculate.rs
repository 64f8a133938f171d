//! `pricewise calculate`

use std::io::{BufRead, Write};

use clap::Args;
use pricewise::{
    calculator::DiscountCalculator, config::ConfigLoader, discounts::DiscountKind,
    factory::DiscountFactory,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::{config::ConfigArgs, errors::CliError, money, prompt::Prompt};

const AMOUNT_PROMPT: &str = "Enter the original amount: ";
const TYPE_PROMPT: &str = "Enter discount type (percentage/fixed/bulk/seasonal): ";

#[derive(Debug, Args)]
pub(crate) struct CalculateArgs {
    /// Original amount; prompted for when omitted
    #[arg(short, long)]
    amount: Option<Decimal>,

    /// Discount type (percentage, fixed, bulk, seasonal); prompted for when omitted
    #[arg(short = 't', long = "type")]
    discount_type: Option<String>,

    /// Percentage, fixed amount or general percentage, depending on the type
    #[arg(short, long)]
    value: Option<Decimal>,

    /// ISO currency code used to display the result (BDT, GBP, USD, EUR)
    #[arg(long, env = "DISCOUNT_CURRENCY", default_value = "BDT")]
    currency: String,

    #[command(flatten)]
    config: ConfigArgs,
}

/// A fully collected discount request
#[derive(Debug, PartialEq)]
struct Request {
    amount: Decimal,
    kind: DiscountKind,
    value: Option<Decimal>,
}

pub(crate) fn run(
    args: &CalculateArgs,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), CliError> {
    let currency = money::currency(&args.currency)?;
    let request = collect_request(args, &mut Prompt::new(input, &mut output))?;

    let factory = DiscountFactory::new(ConfigLoader::new(&args.config.path));
    let discount = factory.create_discount(request.kind.as_str(), request.value)?;
    let final_amount = DiscountCalculator::new().calculate_discount(&discount, request.amount);

    info!(
        kind = %request.kind,
        amount = %request.amount,
        %final_amount,
        "calculated discount"
    );

    writeln!(
        output,
        "The final amount after discount is: {}",
        money::format_amount(final_amount, currency)?
    )?;

    Ok(())
}

fn collect_request<R: BufRead, W: Write>(
    args: &CalculateArgs,
    prompt: &mut Prompt<R, W>,
) -> Result<Request, CliError> {
    let amount = match args.amount {
        Some(amount) => amount,
        None => prompt.ask_decimal(AMOUNT_PROMPT)?,
    };

    let tag = match &args.discount_type {
        Some(tag) => tag.trim().to_string(),
        None => prompt.ask(TYPE_PROMPT)?,
    };

    let kind: DiscountKind = tag
        .parse()
        .map_err(|_unknown| CliError::InvalidType(tag.clone()))?;

    let value = match (args.value, value_prompt(kind)) {
        (Some(value), _) => Some(value),
        (None, Some(question)) => Some(prompt.ask_decimal(question)?),
        (None, None) => None,
    };

    Ok(Request {
        amount,
        kind,
        value,
    })
}

/// The question asked for a kind's value, if it takes one.
fn value_prompt(kind: DiscountKind) -> Option<&'static str> {
    match kind {
        DiscountKind::Percentage => Some("Enter the discount percentage: "),
        DiscountKind::Fixed => Some("Enter the fixed discount amount: "),
        DiscountKind::Bulk => None,
        DiscountKind::Seasonal => Some("Enter the general discount percentage: "),
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, path::PathBuf};

    use pricewise::factory::FactoryError;
    use testresult::TestResult;

    use super::*;

    const CONFIG: &str = r#"{
        "percentage": { "class": "PercentageDiscount" },
        "fixed": { "class": "FixedDiscount" },
        "bulk": {
            "class": "BulkDiscount",
            "parameters": { "threshold": 1000, "bulkDiscountAmount": 200 }
        },
        "seasonal": {
            "class": "SeasonalDiscount",
            "parameters": { "seasonalDiscount": 10 }
        }
    }"#;

    fn args(path: PathBuf) -> CalculateArgs {
        CalculateArgs {
            amount: None,
            discount_type: None,
            value: None,
            currency: "GBP".to_string(),
            config: ConfigArgs { path },
        }
    }

    fn run_with_input(args: &CalculateArgs, input: &str) -> Result<String, CliError> {
        let mut output = Vec::new();

        run(args, Cursor::new(input.to_string()), &mut output)?;

        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn prompts_for_everything_missing() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("discounts.json");
        std::fs::write(&path, CONFIG)?;

        let output = run_with_input(&args(path), "1000\npercentage\n10\n")?;

        assert!(output.starts_with(AMOUNT_PROMPT), "missing amount prompt: {output}");
        assert!(output.contains(TYPE_PROMPT), "missing type prompt: {output}");
        assert!(output.contains("Enter the discount percentage: "), "missing value prompt: {output}");
        assert!(output.contains("The final amount after discount is: "), "missing result: {output}");
        assert!(output.contains("900.00"), "wrong result: {output}");

        Ok(())
    }

    #[test]
    fn flags_skip_prompts() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("discounts.json");
        std::fs::write(&path, CONFIG)?;

        let args = CalculateArgs {
            amount: Some(Decimal::from(500)),
            discount_type: Some("fixed".to_string()),
            value: Some(Decimal::from(600)),
            ..args(path)
        };

        let output = run_with_input(&args, "")?;

        assert!(output.starts_with("The final amount after discount is: "), "unexpected prompt: {output}");
        assert!(output.trim_end().ends_with("0.00"), "wrong result: {output}");

        Ok(())
    }

    #[test]
    fn bulk_does_not_ask_for_a_value() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("discounts.json");
        std::fs::write(&path, CONFIG)?;

        let output = run_with_input(&args(path), "2000\nbulk\n")?;

        assert!(!output.contains("Enter the discount percentage"), "asked for a value: {output}");
        assert!(output.contains("800.00"), "wrong result: {output}");

        Ok(())
    }

    #[test]
    fn seasonal_asks_for_general_percentage() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("discounts.json");
        std::fs::write(&path, CONFIG)?;

        let output = run_with_input(&args(path), "1000\nseasonal\n5\n")?;

        assert!(output.contains("Enter the general discount percentage: "), "missing prompt: {output}");
        assert!(output.contains("850.00"), "wrong result: {output}");

        Ok(())
    }

    #[test]
    fn unknown_type_is_rejected_before_loading_configuration() {
        let result = run_with_input(&args(PathBuf::from("does-not-exist.json")), "1000\nloyalty\n");

        assert!(matches!(result, Err(CliError::InvalidType(tag)) if tag == "loyalty"));
    }

    #[test]
    fn type_missing_from_configuration_is_invalid() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("discounts.json");
        std::fs::write(&path, r#"{ "fixed": { "class": "FixedDiscount" } }"#)?;

        let result = run_with_input(&args(path), "1000\nseasonal\n5\n");

        assert!(matches!(
            result,
            Err(CliError::Factory(FactoryError::InvalidType(tag))) if tag == "seasonal"
        ));

        Ok(())
    }

    #[test]
    fn missing_configuration_is_reported() {
        let result = run_with_input(&args(PathBuf::from("does-not-exist.json")), "1000\nbulk\n");

        assert!(matches!(result, Err(CliError::Factory(FactoryError::Configuration(_)))));
    }

    #[test]
    fn invalid_amount_is_reported() {
        let result = run_with_input(&args(PathBuf::from("unused.json")), "a lot\n");

        assert!(matches!(result, Err(CliError::InvalidNumber(input)) if input == "a lot"));
    }

    #[test]
    fn collect_request_passes_value_through_for_bulk() -> TestResult {
        let args = CalculateArgs {
            amount: Some(Decimal::from(2000)),
            discount_type: Some(" bulk ".to_string()),
            value: Some(Decimal::ONE),
            ..args(PathBuf::from("unused.json"))
        };

        let request = collect_request(&args, &mut Prompt::new(Cursor::new(""), Vec::new()))?;

        assert_eq!(
            request,
            Request {
                amount: Decimal::from(2000),
                kind: DiscountKind::Bulk,
                value: Some(Decimal::ONE),
            }
        );

        Ok(())
    }
}
