//! # checkout-core — Foundational Types for the Checkout Form
//!
//! The leaf of the workspace DAG. Defines the vocabulary every other crate
//! speaks: which fields the form has, which card brands exist, which
//! validation failures a field can report, and the payload handed to the
//! host on a successful submit.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums, no string keys.** `FieldName`, `CardBrand` and
//!    `FieldErrorKind` are exhaustive enums. Adding a field or an error kind
//!    forces every `match` in the workspace to handle it.
//!
//! 2. **Validation failures are values.** A `FieldError` is data rendered
//!    beneath an input, never an `Err` propagated to the host.
//!
//! 3. **Raw strings at the boundary.** `CheckoutValues` carries exactly what
//!    the user sees in the inputs, not parsed numbers or dates.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `checkout-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod brand;
pub mod error;
pub mod field;
pub mod values;
pub mod violation;

// Re-export primary types for ergonomic imports.
pub use brand::CardBrand;
pub use error::CheckoutError;
pub use field::FieldName;
pub use values::CheckoutValues;
pub use violation::{FieldError, FieldErrorKind};
