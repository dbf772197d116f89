//! # CardUtils
//!
//! The stock implementation of [`CardValidator`] and [`CardFormatter`],
//! backed by the brand catalog and a [`Clock`].

use checkout_core::CardBrand;

use crate::catalog::card_for_brand;
use crate::clock::{Clock, SystemClock};
use crate::expiry::{expiry_valid_on, format_expiry};
use crate::number::{brand_of, format_number, number_valid};
use crate::traits::{CardFormatter, CardValidator};

/// Catalog-backed card utilities.
#[derive(Debug, Clone, Default)]
pub struct CardUtils<C = SystemClock> {
    clock: C,
}

impl CardUtils<SystemClock> {
    /// Utilities that check expiry against the host's local date.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> CardUtils<C> {
    /// Utilities that check expiry against `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The clock used for expiry checks.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> CardValidator for CardUtils<C> {
    fn checksum_valid(&self, number: &str) -> bool {
        number_valid(number)
    }

    fn brand_of(&self, number: &str) -> Option<CardBrand> {
        brand_of(number)
    }

    fn cvc_valid(&self, cvc: &str, brand: Option<CardBrand>) -> bool {
        let cvc = cvc.trim();
        if cvc.is_empty() || !cvc.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        match brand.and_then(card_for_brand) {
            Some(card) => card.cvc_lengths.contains(&cvc.len()),
            None => (3..=4).contains(&cvc.len()),
        }
    }

    fn expiry_valid(&self, month: &str, year: &str) -> bool {
        expiry_valid_on(month, year, self.clock.today())
    }
}

impl<C: Clock> CardFormatter for CardUtils<C> {
    fn format_number(&self, raw: &str) -> String {
        format_number(raw)
    }

    fn format_expiry(&self, raw: &str) -> String {
        format_expiry(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn utils() -> CardUtils<FixedClock> {
        CardUtils::with_clock(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()))
    }

    #[test]
    fn cvc_without_brand_accepts_three_or_four_digits() {
        let u = utils();
        assert!(u.cvc_valid("123", None));
        assert!(u.cvc_valid("1234", None));
        assert!(!u.cvc_valid("12", None));
        assert!(!u.cvc_valid("12345", None));
    }

    #[test]
    fn cvc_with_brand_uses_catalog_lengths() {
        let u = utils();
        assert!(u.cvc_valid("123", Some(CardBrand::Visa)));
        assert!(!u.cvc_valid("1234", Some(CardBrand::Visa)));
        assert!(u.cvc_valid("1234", Some(CardBrand::Amex)));
    }

    #[test]
    fn cvc_rejects_non_digits() {
        let u = utils();
        assert!(!u.cvc_valid("12a", None));
        assert!(!u.cvc_valid("", None));
        assert!(!u.cvc_valid("   ", None));
        assert!(u.cvc_valid(" 123 ", None));
    }

    #[test]
    fn expiry_uses_injected_clock() {
        let u = utils();
        assert!(u.expiry_valid("10", "26"));
        assert!(!u.expiry_valid("09", "26"));
    }

    #[test]
    fn trait_methods_delegate() {
        let u = utils();
        assert!(u.checksum_valid("4111 1111 1111 1111"));
        assert_eq!(u.brand_of("5500000000000004"), Some(CardBrand::Mastercard));
        assert_eq!(u.format_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(u.format_expiry("4"), "04 / ");
    }
}
