//! # Field Flags
//!
//! The four field values shared by every form-driving subcommand.

use clap::Args;

use checkout_core::FieldName;
use checkout_form::CheckoutForm;

/// Values to type into the form. Omitted flags leave the field unset.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Card number, with or without separators.
    #[arg(long)]
    pub card_number: Option<String>,

    /// Card expiry, e.g. `12/30` or `12 / 30`.
    #[arg(long)]
    pub card_expire: Option<String>,

    /// Card verification code.
    #[arg(long)]
    pub cvv: Option<String>,
}

impl FieldArgs {
    /// Type every provided value into `form`, in render order.
    pub fn apply(&self, form: &mut CheckoutForm) {
        for (field, value) in self.entries() {
            if let Some(value) = value {
                form.input(field, value);
            }
        }
    }

    fn entries(&self) -> [(FieldName, Option<&str>); 4] {
        [
            (FieldName::Email, self.email.as_deref()),
            (FieldName::CardNumber, self.card_number.as_deref()),
            (FieldName::CardExpire, self.card_expire.as_deref()),
            (FieldName::Cvv, self.cvv.as_deref()),
        ]
    }
}
