//! # Card Capability Traits
//!
//! The checkout form depends on these traits, not on a concrete card
//! library. [`crate::CardUtils`] is the stock implementation; tests and
//! hosts can substitute their own.
//!
//! ## Invariant
//!
//! Implementations are total: every method returns a value for every input
//! and never panics. Malformed input is "invalid" or "no brand".

use checkout_core::CardBrand;

/// Validation predicates over card data.
pub trait CardValidator: Send + Sync {
    /// Whether `number` is a structurally valid card number: digits only
    /// (spaces and hyphens ignored), a known brand, a length that brand
    /// allows, and a passing checksum where the brand uses one.
    fn checksum_valid(&self, number: &str) -> bool;

    /// The brand of `number`, or `None` when no brand prefix matches.
    fn brand_of(&self, number: &str) -> Option<CardBrand>;

    /// Whether `cvc` is a valid verification code, optionally for a
    /// specific brand.
    fn cvc_valid(&self, cvc: &str, brand: Option<CardBrand>) -> bool;

    /// Whether the expiry `month` / `year` is well formed and not in the
    /// past.
    fn expiry_valid(&self, month: &str, year: &str) -> bool;
}

/// Display formatting for the two formatted inputs.
pub trait CardFormatter: Send + Sync {
    /// Group the digits of `raw` the way the detected brand prints them.
    fn format_number(&self, raw: &str) -> String;

    /// Normalize `raw` towards `MM / YY` as digits are typed.
    fn format_expiry(&self, raw: &str) -> String;
}
