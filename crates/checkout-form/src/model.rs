//! # Field Model
//!
//! Holds the last value written to each input. No validation happens here.

use serde::{Deserialize, Serialize};

use checkout_core::{CheckoutValues, FieldName};

/// The raw values of the four checkout inputs. `None` means the input has
/// never been written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldModel {
    /// Email address.
    pub email: Option<String>,
    /// Card number as displayed.
    pub card_number: Option<String>,
    /// Card expiry as displayed.
    pub card_expire: Option<String>,
    /// Card verification code.
    pub cvv: Option<String>,
}

impl FieldModel {
    /// A model with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as the current value of `field`.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Return `field` to the unset state.
    pub fn unset_field(&mut self, field: FieldName) {
        *self.slot_mut(field) = None;
    }

    /// The current value of `field`.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Email => self.email.as_deref(),
            FieldName::CardNumber => self.card_number.as_deref(),
            FieldName::CardExpire => self.card_expire.as_deref(),
            FieldName::Cvv => self.cvv.as_deref(),
        }
    }

    /// The current value of `field`, with unset read as empty.
    pub fn display_value(&self, field: FieldName) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// The submit payload, if every field has been written.
    pub fn to_values(&self) -> Option<CheckoutValues> {
        Some(CheckoutValues {
            email: self.email.clone()?,
            card_number: self.card_number.clone()?,
            card_expire: self.card_expire.clone()?,
            cvv: self.cvv.clone()?,
        })
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut Option<String> {
        match field {
            FieldName::Email => &mut self.email,
            FieldName::CardNumber => &mut self.card_number,
            FieldName::CardExpire => &mut self.card_expire,
            FieldName::Cvv => &mut self.cvv,
        }
    }
}
