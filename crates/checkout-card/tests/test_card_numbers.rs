//! # Card Number Test Vectors
//!
//! Published network test numbers run through the public API: each must be
//! structurally valid, resolve to the expected brand, and format into the
//! brand's grouping.

use checkout_card::{CardFormatter, CardUtils, CardValidator};
use checkout_core::CardBrand;

const VECTORS: &[(&str, CardBrand, &str)] = &[
    ("4111111111111111", CardBrand::Visa, "4111 1111 1111 1111"),
    ("4012888888881881", CardBrand::Visa, "4012 8888 8888 1881"),
    ("4222222222222", CardBrand::Visa, "4222 2222 2222 2"),
    ("5500000000000004", CardBrand::Mastercard, "5500 0000 0000 0004"),
    ("5555555555554444", CardBrand::Mastercard, "5555 5555 5555 4444"),
    ("2223003122003222", CardBrand::Mastercard, "2223 0031 2200 3222"),
    ("378282246310005", CardBrand::Amex, "3782 822463 10005"),
    ("371449635398431", CardBrand::Amex, "3714 496353 98431"),
    ("30569309025904", CardBrand::DinersClub, "3056 930902 5904"),
    ("6011111111111117", CardBrand::Discover, "6011 1111 1111 1117"),
    ("3530111333300000", CardBrand::Jcb, "3530 1113 3330 0000"),
];

#[test]
fn published_numbers_validate_and_format() {
    let utils = CardUtils::new();
    for (number, brand, display) in VECTORS {
        assert!(utils.checksum_valid(number), "{number} should be valid");
        assert_eq!(utils.brand_of(number), Some(*brand), "{number}");
        assert_eq!(utils.format_number(number), *display, "{number}");
        assert!(utils.checksum_valid(display), "display form of {number}");
        assert_eq!(utils.brand_of(display), Some(*brand), "display form of {number}");
    }
}

#[test]
fn typing_a_visa_number_digit_by_digit() {
    let utils = CardUtils::new();
    let mut shown = String::new();
    for digit in "4111111111111111".chars() {
        shown.push(digit);
        shown = utils.format_number(&shown);
    }
    assert_eq!(shown, "4111 1111 1111 1111");

    shown.push('9');
    assert_eq!(utils.format_number(&shown), "4111 1111 1111 1111");
}

#[test]
fn garbage_input_never_panics() {
    let utils = CardUtils::new();
    for input in ["", " ", "-", "abcd", "🙂🙂", "4\u{0660}11", "////"] {
        let _ = utils.checksum_valid(input);
        let _ = utils.brand_of(input);
        let _ = utils.cvc_valid(input, None);
        let _ = utils.expiry_valid(input, input);
        let _ = utils.format_number(input);
        let _ = utils.format_expiry(input);
    }
}
