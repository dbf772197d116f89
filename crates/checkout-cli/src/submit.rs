//! # Submit Subcommand
//!
//! Submits the form. The success callback prints the submitted values as
//! JSON, standing in for the host's payment handler.

use anyhow::Result;
use clap::Args;

use checkout_core::CheckoutValues;
use checkout_form::{BlockReason, CheckoutForm, CheckoutProps, FormConfig, SubmitOutcome};

use crate::fields::FieldArgs;
use crate::EXIT_INVALID;

/// Arguments for `checkout submit`.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Submit with the host's loading flag set.
    #[arg(long)]
    pub loading: bool,
}

/// Fill a form from `args` and submit it, handing accepted values to
/// `on_success`.
pub fn submit_with(
    args: &SubmitArgs,
    config: &FormConfig,
    on_success: impl FnMut(CheckoutValues) + Send + 'static,
) -> (SubmitOutcome, CheckoutForm) {
    let props = CheckoutProps::from_config(config, on_success).with_loading(args.loading);
    let mut form = CheckoutForm::with_config(props, config);
    args.fields.apply(&mut form);
    (form.submit(), form)
}

fn print_values(values: CheckoutValues) {
    match serde_json::to_string_pretty(&values) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("failed to serialize submitted values: {e}"),
    }
}

/// Execute `checkout submit`.
pub fn run_submit(args: &SubmitArgs, config: &FormConfig) -> Result<u8> {
    let (outcome, form) = submit_with(args, config, print_values);
    match outcome {
        SubmitOutcome::Submitted(_) => Ok(0),
        SubmitOutcome::Blocked(BlockReason::Loading) => {
            eprintln!("submit blocked: {}", BlockReason::Loading);
            Ok(EXIT_INVALID)
        }
        SubmitOutcome::Blocked(BlockReason::Invalid) => {
            eprintln!("submit blocked: {}", BlockReason::Invalid);
            for field in form.validation().invalid_fields() {
                let text = form.validation().error_text(field).unwrap_or_default();
                eprintln!("  {field}: {text}");
            }
            Ok(EXIT_INVALID)
        }
    }
}
