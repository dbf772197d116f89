//! # Error Types
//!
//! Errors raised when the host hands the checkout crates something they
//! cannot interpret: an unknown field key or an unknown brand name.
//!
//! Field validation failures are *not* errors in this sense; see
//! [`crate::violation`].

use thiserror::Error;

/// Top-level error type for the checkout crates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A field key that is not one of `email`, `card_number`,
    /// `card_expire`, `cvv`.
    #[error("unknown field: {0:?}")]
    UnknownField(String),

    /// A card brand name not present in the brand catalog.
    #[error("unknown card brand: {0:?}")]
    UnknownBrand(String),
}
