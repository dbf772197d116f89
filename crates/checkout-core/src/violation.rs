//! # Field Validation Failures
//!
//! The error taxonomy of the form is purely "this field does not satisfy
//! its rule". Each failure has a machine-readable kind and the message that
//! is rendered beneath the input.
//!
//! | Kind | Fields | Default message |
//! |------|--------|-----------------|
//! | `EMPTY` | all | Required |
//! | `INVALID_FORMAT` | email | Must be a valid email |
//! | `INVALID_NUMBER` | card_number | Must be a valid card |
//! | `UNSUPPORTED_BRAND` | card_number | Must be Visa / Master card type |
//! | `INVALID_DATE` | card_expire | Must be valid expiration date |
//! | `WRONG_LENGTH` | cvv | Maximum 3 digits |
//! | `INVALID_CVV` | cvv | Must be valid CVV |

use serde::{Deserialize, Serialize};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldErrorKind {
    /// The field is unset or holds an empty string.
    Empty,
    /// The email is not syntactically valid.
    InvalidFormat,
    /// The card number fails the structural/checksum check.
    InvalidNumber,
    /// The card number is valid but its brand is not accepted.
    UnsupportedBrand,
    /// The expiry cannot be parsed or lies in the past.
    InvalidDate,
    /// The CVV does not have the required number of characters.
    WrongLength,
    /// The CVV has the right length but is not a valid code.
    InvalidCvv,
}

impl FieldErrorKind {
    /// The message rendered for this kind under the default configuration.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Empty => "Required",
            Self::InvalidFormat => "Must be a valid email",
            Self::InvalidNumber => "Must be a valid card",
            Self::UnsupportedBrand => "Must be Visa / Master card type",
            Self::InvalidDate => "Must be valid expiration date",
            Self::WrongLength => "Maximum 3 digits",
            Self::InvalidCvv => "Must be valid CVV",
        }
    }
}

impl std::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Empty => "EMPTY",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidNumber => "INVALID_NUMBER",
            Self::UnsupportedBrand => "UNSUPPORTED_BRAND",
            Self::InvalidDate => "INVALID_DATE",
            Self::WrongLength => "WRONG_LENGTH",
            Self::InvalidCvv => "INVALID_CVV",
        };
        f.write_str(s)
    }
}

/// A single validation failure attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Failure kind.
    pub kind: FieldErrorKind,
    /// Message shown beneath the input.
    pub message: String,
}

impl FieldError {
    /// A failure carrying the kind's default message.
    pub fn new(kind: FieldErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    /// A failure with a message other than the kind's default.
    pub fn with_message(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
