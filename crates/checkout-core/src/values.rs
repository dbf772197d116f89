//! # Submitted Values
//!
//! The payload handed to the host's success callback: the four inputs as
//! the user sees them, formatting included.

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// The four raw field values of a valid checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutValues {
    /// Email address.
    pub email: String,
    /// Card number in display form (`4111 1111 1111 1111`).
    pub card_number: String,
    /// Expiry in display form (`MM / YY`).
    pub card_expire: String,
    /// Card verification code.
    pub cvv: String,
}

impl CheckoutValues {
    /// The value of one field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::CardNumber => &self.card_number,
            FieldName::CardExpire => &self.card_expire,
            FieldName::Cvv => &self.cvv,
        }
    }
}
