//! # Render Subcommand
//!
//! Draws the form as a host would show it after the given input.

use anyhow::{Context, Result};
use clap::Args;

use checkout_form::{CheckoutForm, CheckoutProps, CheckoutView, FormConfig};

use crate::fields::FieldArgs;

/// Arguments for `checkout render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Render with the host's loading flag set.
    #[arg(long)]
    pub loading: bool,

    /// Override the submit button label.
    #[arg(long)]
    pub submit_text: Option<String>,

    /// Emit the view model as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Build the view for `args` under `config`.
pub fn build_view(args: &RenderArgs, config: &FormConfig) -> CheckoutView {
    let mut props = CheckoutProps::from_config(config, |_| {}).with_loading(args.loading);
    if let Some(text) = &args.submit_text {
        props = props.with_submit_text(text.clone());
    }
    let mut form = CheckoutForm::with_config(props, config);
    args.fields.apply(&mut form);
    form.view()
}

/// Execute `checkout render`.
pub fn run_render(args: &RenderArgs, config: &FormConfig) -> Result<u8> {
    let view = build_view(args, config);
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("failed to serialize view")?;
        println!("{json}");
    } else {
        println!("{view}");
    }
    Ok(0)
}
