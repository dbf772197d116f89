//! # Card Brands
//!
//! Card network identities recognised by the brand catalog. Only Visa and
//! Mastercard are accepted by the default checkout configuration, but every
//! brand the catalog can detect is named here so that detection and
//! acceptance stay separate decisions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CheckoutError;

/// A card network, as derived from the card number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    /// Visa Electron (a Visa debit range with its own prefixes).
    VisaElectron,
    /// Maestro.
    Maestro,
    /// Forbrugsforeningen (Danish loyalty/payment card).
    Forbrugsforeningen,
    /// Dankort.
    Dankort,
    /// Visa.
    Visa,
    /// Mastercard, including the 2-series range.
    Mastercard,
    /// American Express.
    Amex,
    /// Diners Club.
    DinersClub,
    /// Discover.
    Discover,
    /// UnionPay.
    UnionPay,
    /// JCB.
    Jcb,
}

impl CardBrand {
    /// Every brand, in catalog order.
    pub const ALL: [CardBrand; 11] = [
        CardBrand::VisaElectron,
        CardBrand::Maestro,
        CardBrand::Forbrugsforeningen,
        CardBrand::Dankort,
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::DinersClub,
        CardBrand::Discover,
        CardBrand::UnionPay,
        CardBrand::Jcb,
    ];

    /// The brands the checkout form accepts unless configured otherwise.
    pub const DEFAULT_ACCEPTED: [CardBrand; 2] = [CardBrand::Visa, CardBrand::Mastercard];

    /// Lowercase identifier (`visa`, `mastercard`, `dinersclub`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisaElectron => "visaelectron",
            Self::Maestro => "maestro",
            Self::Forbrugsforeningen => "forbrugsforeningen",
            Self::Dankort => "dankort",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::DinersClub => "dinersclub",
            Self::Discover => "discover",
            Self::UnionPay => "unionpay",
            Self::Jcb => "jcb",
        }
    }

    /// Human-facing name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VisaElectron => "Visa Electron",
            Self::Maestro => "Maestro",
            Self::Forbrugsforeningen => "Forbrugsforeningen",
            Self::Dankort => "Dankort",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::UnionPay => "UnionPay",
            Self::Jcb => "JCB",
        }
    }
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardBrand {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|brand| brand.as_str() == needle)
            .ok_or_else(|| CheckoutError::UnknownBrand(s.to_string()))
    }
}
