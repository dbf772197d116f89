//! # Form Fields
//!
//! The four inputs of the checkout form. The snake_case keys double as the
//! JSON keys of the submitted payload and as the CLI's field names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CheckoutError;

/// One of the four checkout form inputs, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// Customer email address.
    Email,
    /// Card number, displayed grouped (`4111 1111 1111 1111`).
    CardNumber,
    /// Card expiry, displayed as `MM / YY`.
    CardExpire,
    /// Card verification code.
    Cvv,
}

impl FieldName {
    /// All fields in render order.
    pub const ALL: [FieldName; 4] = [
        FieldName::Email,
        FieldName::CardNumber,
        FieldName::CardExpire,
        FieldName::Cvv,
    ];

    /// The snake_case key of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::CardNumber => "card_number",
            Self::CardExpire => "card_expire",
            Self::Cvv => "cvv",
        }
    }

    /// Whether typing into this field rewrites the input through the
    /// card formatter.
    pub fn is_formatted(&self) -> bool {
        matches!(self, Self::CardNumber | Self::CardExpire)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CheckoutError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_key() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = "card".parse::<FieldName>().unwrap_err();
        assert_eq!(err, CheckoutError::UnknownField("card".to_string()));
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&FieldName::CardExpire).unwrap();
        assert_eq!(json, "\"card_expire\"");
    }

    #[test]
    fn only_card_fields_are_formatted() {
        assert!(FieldName::CardNumber.is_formatted());
        assert!(FieldName::CardExpire.is_formatted());
        assert!(!FieldName::Email.is_formatted());
        assert!(!FieldName::Cvv.is_formatted());
    }
}
