//! # Validate Subcommand
//!
//! Types the given values into a fresh form and prints the resulting
//! validation report.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use checkout_core::{FieldError, FieldName};
use checkout_form::{CheckoutForm, CheckoutProps, FieldModel, FormConfig};

use crate::fields::FieldArgs;
use crate::EXIT_INVALID;

/// Report encoding.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// One line per field.
    Text,
}

/// Arguments for `checkout validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Machine-readable validation report.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub values: FieldModel,
    pub errors: Vec<FieldReport>,
}

/// Errors of one field.
#[derive(Debug, Serialize)]
pub struct FieldReport {
    pub field: FieldName,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Report on the current state of `form`.
    pub fn of(form: &CheckoutForm) -> Self {
        let validation = form.validation();
        let errors = validation
            .invalid_fields()
            .into_iter()
            .map(|field| FieldReport {
                field,
                errors: validation.errors(field).to_vec(),
            })
            .collect();
        Self {
            valid: validation.is_valid(),
            values: form.model().clone(),
            errors,
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        for field in FieldName::ALL {
            let status = match self.errors.iter().find(|r| r.field == field) {
                Some(report) => report
                    .errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                None => "ok".to_string(),
            };
            out.push_str(&format!("{:<12} {status}\n", field.as_str()));
        }
        out.push_str(if self.valid { "VALID" } else { "INVALID" });
        out
    }
}

/// Build a form from `config`, type the field flags into it and report.
pub fn build_report(args: &ValidateArgs, config: &FormConfig) -> ValidationReport {
    let mut form = CheckoutForm::with_config(CheckoutProps::from_config(config, |_| {}), config);
    args.fields.apply(&mut form);
    ValidationReport::of(&form)
}

/// Execute `checkout validate`.
pub fn run_validate(args: &ValidateArgs, config: &FormConfig) -> Result<u8> {
    let report = build_report(args, config);
    tracing::debug!(valid = report.valid, invalid = report.errors.len(), "validated");

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("failed to serialize validation report")?;
            println!("{json}");
        }
        OutputFormat::Text => println!("{}", report.to_text()),
    }

    Ok(if report.valid { 0 } else { EXIT_INVALID })
}
