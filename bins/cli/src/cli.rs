//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tally_shared::types::{PrecisionUnit, RoundingMethod};

/// Format amounts, rates and dates the way documents print them.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Extra settings file layered over `config/`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to format.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format a monetary amount.
    Currency {
        /// Amount to format.
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// ISO 4217 code; defaults to the configured default currency.
        #[arg(long)]
        code: Option<String>,
        /// BCP-47 locale overriding the currency's own.
        #[arg(long)]
        locale: Option<String>,
    },
    /// Format a number with locale grouping and two decimals.
    Number {
        /// Value to format.
        #[arg(allow_negative_numbers = true)]
        value: Decimal,
        /// BCP-47 locale; defaults to the default currency's locale.
        #[arg(long)]
        locale: Option<String>,
    },
    /// Round a value to the configured (or given) precision unit.
    Round {
        /// Value to round.
        #[arg(allow_negative_numbers = true)]
        value: Decimal,
        /// Rounding method (no_rounding, nearest, up, down).
        #[arg(long)]
        method: Option<RoundingMethod>,
        /// Precision unit, e.g. 0.05.
        #[arg(long)]
        unit: Option<PrecisionUnit>,
    },
    /// Format a percentage, trimming trailing zeros.
    Percent {
        /// Value to format.
        #[arg(allow_negative_numbers = true)]
        value: Decimal,
        /// Maximum fractional digits.
        #[arg(long, default_value_t = 2)]
        decimals: u32,
    },
    /// Format a tax rate.
    TaxRate {
        /// Rate to format.
        #[arg(allow_negative_numbers = true)]
        rate: Decimal,
    },
    /// Format a date as `Jan 05, 2024`.
    Date {
        /// ISO-8601 date or timestamp; omitted means no date.
        input: Option<String>,
    },
    /// List the currency catalog.
    Currencies {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}
