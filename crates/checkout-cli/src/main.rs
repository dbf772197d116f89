//! # checkout CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checkout_cli::format::{run_format, FormatArgs};
use checkout_cli::render::{run_render, RenderArgs};
use checkout_cli::resolve_config;
use checkout_cli::submit::{run_submit, SubmitArgs};
use checkout_cli::validate::{run_validate, ValidateArgs};
use checkout_core::CardBrand;

/// Checkout form toolkit.
///
/// Validates, formats, renders and submits card payment details exactly as
/// the interactive form would.
#[derive(Parser, Debug)]
#[command(name = "checkout", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML form configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Accepted card brand. Repeat to accept several; overrides the config.
    #[arg(long = "accept", value_name = "BRAND", global = true)]
    accept: Vec<CardBrand>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate checkout details and print the report.
    Validate(ValidateArgs),

    /// Format a card number or expiry as the form would display it.
    Format(FormatArgs),

    /// Render the form after typing the given details.
    Render(RenderArgs),

    /// Submit checkout details.
    Submit(SubmitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("checkout CLI starting");

    let result = resolve_config(cli.config.as_deref(), &cli.accept).and_then(|config| {
        match &cli.command {
            Commands::Validate(args) => run_validate(args, &config),
            Commands::Format(args) => run_format(args),
            Commands::Render(args) => run_render(args, &config),
            Commands::Submit(args) => run_submit(args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
