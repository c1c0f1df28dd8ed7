//! Subcommand execution.

use anyhow::Context;
use tally_core::rounding::RoundingConfig;
use tally_core::{DateInput, Formatter, currency, format_date, format_percentage, format_tax_rate};

use crate::cli::Command;

/// Runs `command` against `formatter` and returns what to print.
pub fn run(command: &Command, formatter: &Formatter) -> anyhow::Result<String> {
    let output = match command {
        Command::Currency {
            amount,
            code,
            locale,
        } => {
            let code = code
                .as_deref()
                .unwrap_or_else(|| formatter.default_currency().code.as_str());
            formatter.format_currency(*amount, code, locale.as_deref())
        }
        Command::Number { value, locale } => {
            let locale = locale
                .as_deref()
                .unwrap_or_else(|| formatter.default_currency().locale.as_str());
            currency::format_number(*value, locale)
        }
        Command::Round {
            value,
            method,
            unit,
        } => {
            let configured = formatter.rounding();
            let config = RoundingConfig::new(
                method.unwrap_or(configured.method),
                unit.unwrap_or(configured.unit),
            );
            let adjustment = config.adjust(*value);
            format!(
                "{} (adjustment {})",
                adjustment.rounded.normalize(),
                adjustment.adjustment.normalize()
            )
        }
        Command::Percent { value, decimals } => format_percentage(*value, *decimals),
        Command::TaxRate { rate } => format_tax_rate(*rate),
        Command::Date { input } => format_date(input.as_deref().map(DateInput::Text)),
        Command::Currencies { json } => {
            if *json {
                let list: Vec<_> = formatter.currencies().collect();
                serde_json::to_string_pretty(&list).context("Failed to serialize currencies")?
            } else {
                formatter
                    .currencies()
                    .map(|c| {
                        // Symbols can be multi-byte or double-width, so they go last.
                        format!("{:<4} {:<6} {:<24} {}", c.code, c.locale, c.display_name, c.symbol)
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    };
    Ok(output)
}
