//! # Card Number Validation and Grouping
//!
//! Brand detection, length and checksum come from `card_validate`, which
//! carries the creditcardutils brand table. Grouping for display comes from
//! the local [catalog](crate::catalog).

use card_validate::{Type, Validate};

use checkout_core::CardBrand;

use crate::catalog::{card_for_number, Grouping};

/// Strip everything but ASCII digits.
pub(crate) fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Map a detected network onto the brands the form knows. Networks
/// without a [`CardBrand`] (MIR) map to `None`.
fn brand_of_type(card_type: Type) -> Option<CardBrand> {
    match card_type {
        Type::VisaElectron => Some(CardBrand::VisaElectron),
        Type::Maestro => Some(CardBrand::Maestro),
        Type::Forbrugsforeningen => Some(CardBrand::Forbrugsforeningen),
        Type::Dankort => Some(CardBrand::Dankort),
        Type::Visa => Some(CardBrand::Visa),
        Type::MasterCard => Some(CardBrand::Mastercard),
        Type::Amex => Some(CardBrand::Amex),
        Type::DinersClub => Some(CardBrand::DinersClub),
        Type::Discover => Some(CardBrand::Discover),
        Type::UnionPay => Some(CardBrand::UnionPay),
        Type::JCB => Some(CardBrand::Jcb),
        _ => None,
    }
}

/// The brand of a card number. Non-digits are ignored, so grouped display
/// values resolve the same as bare digits.
pub fn brand_of(raw: &str) -> Option<CardBrand> {
    Validate::evaluate_type(&digits_only(raw))
        .ok()
        .and_then(brand_of_type)
}

/// Whether `raw` is a structurally valid card number.
///
/// Whitespace and hyphens are removed; anything else that is not a digit
/// makes the number invalid. The remaining digits must belong to a known
/// network, have one of its lengths, and pass the Luhn checksum.
pub fn number_valid(raw: &str) -> bool {
    let number: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    Validate::from(&number).is_ok()
}

/// Group the digits of `raw` for display.
///
/// Non-digits are dropped. Without a recognised brand the bare digits are
/// returned. With one, the digits are cut to the brand's longest length
/// and split by its grouping, joined with single spaces.
pub fn format_number(raw: &str) -> String {
    let digits = digits_only(raw);
    let Some(card) = card_for_number(&digits) else {
        return digits;
    };
    let digits = &digits[..digits.len().min(card.max_length)];

    let groups: Vec<&str> = match card.grouping {
        Grouping::Every(size) => chunk(digits, std::iter::repeat(size)),
        Grouping::Blocks(sizes) => chunk(digits, sizes.iter().copied()),
    };
    groups.join(" ")
}

fn chunk(digits: &str, sizes: impl Iterator<Item = usize>) -> Vec<&str> {
    let mut rest = digits;
    let mut groups = Vec::new();
    for size in sizes {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(size.min(rest.len()));
        groups.push(head);
        rest = tail;
    }
    groups
}
