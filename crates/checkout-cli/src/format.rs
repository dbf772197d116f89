//! # Format Subcommand
//!
//! Runs raw input through the same formatters the form applies to typed
//! card fields.

use anyhow::Result;
use clap::{Args, Subcommand};

use checkout_card::{CardFormatter, CardUtils};

/// Arguments for `checkout format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    #[command(subcommand)]
    pub command: FormatCommand,
}

/// What to format.
#[derive(Subcommand, Debug)]
pub enum FormatCommand {
    /// Group a card number by its brand's pattern.
    Number {
        /// Raw card number.
        raw: String,
    },
    /// Normalize an expiry to `MM / YY`.
    Expiry {
        /// Raw expiry.
        raw: String,
    },
}

/// Format `command`'s input with `formatter`.
pub fn format_with(command: &FormatCommand, formatter: &dyn CardFormatter) -> String {
    match command {
        FormatCommand::Number { raw } => formatter.format_number(raw),
        FormatCommand::Expiry { raw } => formatter.format_expiry(raw),
    }
}

/// Execute `checkout format`.
pub fn run_format(args: &FormatArgs) -> Result<u8> {
    println!("{}", format_with(&args.command, &CardUtils::new()));
    Ok(0)
}
