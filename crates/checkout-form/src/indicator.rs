//! # Card-Type Indicator
//!
//! Decides which card icons are lit. A brand icon is active when the
//! current card number parses to that brand. The generic icon beside the
//! CVV input is always active; it is decoration and takes no part in
//! validation.

use serde::{Deserialize, Serialize};

use checkout_card::CardValidator;
use checkout_core::CardBrand;

const ACTIVE_OPACITY: f32 = 1.0;
const INACTIVE_OPACITY: f32 = 0.3;

/// What an icon depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// A card network logo.
    Brand(CardBrand),
    /// The unbranded card shown next to the CVV input.
    Generic,
}

/// A card icon and whether it is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIcon {
    /// What the icon depicts.
    pub kind: IconKind,
    /// Highlighted (full opacity) or dimmed.
    pub active: bool,
}

impl CardIcon {
    /// Rendered opacity: full when active, dimmed otherwise.
    pub fn opacity(&self) -> f32 {
        if self.active {
            ACTIVE_OPACITY
        } else {
            INACTIVE_OPACITY
        }
    }

    /// Swatch colour of the icon.
    pub fn color(&self) -> &'static str {
        match self.kind {
            IconKind::Brand(CardBrand::Visa) => "blue",
            IconKind::Brand(CardBrand::Mastercard) => "red",
            _ => "#000",
        }
    }
}

/// Whether `brand` is the parsed brand of `card_number`.
pub fn brand_active(
    card_number: Option<&str>,
    brand: CardBrand,
    validator: &dyn CardValidator,
) -> bool {
    match card_number {
        Some(number) if !number.is_empty() => validator.brand_of(number) == Some(brand),
        _ => false,
    }
}

/// One icon per brand in `brands`, lit when `card_number` is that brand.
pub fn card_icons(
    card_number: Option<&str>,
    brands: &[CardBrand],
    validator: &dyn CardValidator,
) -> Vec<CardIcon> {
    brands
        .iter()
        .map(|&brand| CardIcon {
            kind: IconKind::Brand(brand),
            active: brand_active(card_number, brand, validator),
        })
        .collect()
}

/// The generic icon beside the CVV input.
pub fn cvv_icon() -> CardIcon {
    CardIcon {
        kind: IconKind::Generic,
        active: true,
    }
}
