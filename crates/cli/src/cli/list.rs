//! `pricewise list`

use std::io::Write;

use clap::Args;
use pricewise::{
    config::{DiscountConfig, DiscountEntry},
    discounts::DiscountKind,
};
use tabled::{builder::Builder, settings::Style};

use crate::{config::ConfigArgs, errors::CliError};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

pub(crate) fn run(args: &ListArgs, mut output: impl Write) -> Result<(), CliError> {
    let config = DiscountConfig::from_path(&args.config.path)?;

    writeln!(output, "{}", render(&config))?;

    Ok(())
}

fn render(config: &DiscountConfig) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Type", "Class", "Parameters", "Supported"]);

    for (tag, entry) in config.entries() {
        let supported = tag.parse::<DiscountKind>().is_ok();

        builder.push_record([
            tag.to_string(),
            entry.class.clone(),
            parameters(entry),
            String::from(if supported { "yes" } else { "no" }),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    table.to_string()
}

/// One `name: value` line per parameter, sorted by name.
fn parameters(entry: &DiscountEntry) -> String {
    let mut lines: Vec<String> = entry
        .parameters
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();

    lines.sort_unstable();
    lines.join("\n")
}
