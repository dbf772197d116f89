//! # Brand Catalog
//!
//! Display and CVC data per card network. Which network a number belongs
//! to, and whether its length and checksum are acceptable, is decided by
//! `card_validate`; this table only carries what that crate does not
//! expose.
//!
//! | Brand | Max length | CVC | Grouping |
//! |-------|------------|-----|----------|
//! | visaelectron | 16 | 3 | 4s |
//! | maestro | 19 | 3 | 4s |
//! | forbrugsforeningen | 16 | 3 | 4s |
//! | dankort | 16 | 3 | 4s |
//! | visa | 16 | 3 | 4s |
//! | mastercard | 16 | 3 | 4s |
//! | amex | 15 | 3, 4 | 4-6-5 |
//! | dinersclub | 14 | 3 | 4-6-4 |
//! | discover | 16 | 3 | 4s |
//! | unionpay | 19 | 3 | 4s |
//! | jcb | 16 | 3 | 4s |

use checkout_core::CardBrand;

use crate::number::brand_of;

/// How a brand prints its digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Fixed-size groups repeated across the whole number.
    Every(usize),
    /// A fixed sequence of group sizes; digits beyond the last block are
    /// dropped.
    Blocks(&'static [usize]),
}

/// One row of the brand catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpec {
    /// The network this row describes.
    pub brand: CardBrand,
    /// The longest number this brand issues.
    pub max_length: usize,
    /// Valid CVC lengths.
    pub cvc_lengths: &'static [usize],
    /// Display grouping.
    pub grouping: Grouping,
}

const FOURS: Grouping = Grouping::Every(4);

const fn spec(
    brand: CardBrand,
    max_length: usize,
    cvc_lengths: &'static [usize],
    grouping: Grouping,
) -> CardSpec {
    CardSpec {
        brand,
        max_length,
        cvc_lengths,
        grouping,
    }
}

static CATALOG: [CardSpec; 11] = [
    spec(CardBrand::VisaElectron, 16, &[3], FOURS),
    spec(CardBrand::Maestro, 19, &[3], FOURS),
    spec(CardBrand::Forbrugsforeningen, 16, &[3], FOURS),
    spec(CardBrand::Dankort, 16, &[3], FOURS),
    spec(CardBrand::Visa, 16, &[3], FOURS),
    spec(CardBrand::Mastercard, 16, &[3], FOURS),
    spec(CardBrand::Amex, 15, &[3, 4], Grouping::Blocks(&[4, 6, 5])),
    spec(CardBrand::DinersClub, 14, &[3], Grouping::Blocks(&[4, 6, 4])),
    spec(CardBrand::Discover, 16, &[3], FOURS),
    spec(CardBrand::UnionPay, 19, &[3], FOURS),
    spec(CardBrand::Jcb, 16, &[3], FOURS),
];

/// The catalog row for `brand`.
pub fn card_for_brand(brand: CardBrand) -> Option<&'static CardSpec> {
    CATALOG.iter().find(|card| card.brand == brand)
}

/// The catalog row for the brand of `number`, if it has one.
pub fn card_for_number(number: &str) -> Option<&'static CardSpec> {
    brand_of(number).and_then(card_for_brand)
}
