//! # checkout-card — Card Utilities
//!
//! The card-utilities capability the checkout form delegates to. The form
//! never inspects card numbers itself: it asks a [`CardValidator`] whether
//! a value is acceptable and a [`CardFormatter`] how it should be displayed.
//!
//! ## Modules
//!
//! - **traits** (`traits.rs`): the two capability traits.
//! - **catalog** (`catalog.rs`): per-brand display data (maximum length,
//!   CVC lengths, digit grouping).
//! - **number** (`number.rs`): brand detection and checksum via
//!   `card_validate`, and grouping for display.
//! - **expiry** (`expiry.rs`): `MM / YY` formatting and expiry checks.
//! - **clock** (`clock.rs`): the source of "today" for expiry checks.
//! - **utils** (`utils.rs`): `CardUtils`, the concrete implementation of
//!   both traits.
//!
//! ## Crate Policy
//!
//! - Malformed input never panics. It yields "no brand" or "invalid".
//! - No I/O. The only ambient input is the clock, and it is injectable.

pub mod catalog;
pub mod clock;
pub mod expiry;
pub mod number;
pub mod traits;
pub mod utils;

pub use catalog::{card_for_brand, card_for_number, CardSpec, Grouping};
pub use clock::{Clock, FixedClock, SystemClock};
pub use expiry::{display_expiry, expiry_valid_on, format_expiry, split_expiry, EXPIRY_SEPARATOR};
pub use number::{brand_of, format_number, number_valid};
pub use traits::{CardFormatter, CardValidator};
pub use utils::CardUtils;
