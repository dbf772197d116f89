//! # checkout-cli — Command-Line Host for the Checkout Form
//!
//! Drives a [`checkout_form::CheckoutForm`] from the command line, the way
//! a UI host would drive it from keystrokes. Field flags are fed through
//! the form's input path, so card numbers and expiries are formatted
//! exactly as they would be on screen.
//!
//! ## Subcommands
//!
//! - `checkout validate`: validation report, exit 2 when invalid.
//! - `checkout format`: format a card number or expiry.
//! - `checkout render`: draw the form as text or JSON.
//! - `checkout submit`: submit, printing the values handed to the host.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; form behaviour lives in `checkout-form`.
//! - Exit codes: 0 success, 1 error, 2 form invalid or submit blocked.

pub mod fields;
pub mod format;
pub mod render;
pub mod submit;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use checkout_core::CardBrand;
use checkout_form::FormConfig;

/// Exit code for an invalid form or a blocked submit.
pub const EXIT_INVALID: u8 = 2;

/// Build the form configuration from an optional YAML file and an optional
/// override of the accepted brands.
pub fn resolve_config(path: Option<&Path>, accept: &[CardBrand]) -> Result<FormConfig> {
    let mut config = match path {
        Some(path) => FormConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FormConfig::default(),
    };
    if !accept.is_empty() {
        config.allowed_brands = accept.to_vec();
    }
    config.validate().context("invalid configuration")?;
    tracing::debug!(brands = ?config.allowed_brands, cvv_length = config.cvv_length, "config resolved");
    Ok(config)
}
