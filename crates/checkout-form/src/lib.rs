//! # checkout-form — Headless Checkout Form
//!
//! A checkout form reduced to its state and derived state. The host feeds
//! input and submit events in, and reads a [`CheckoutView`] back out to
//! draw. Nothing here renders pixels or talks to the network.
//!
//! ## Data Flow
//!
//! ```text
//! input event ──▶ formatter (card_number, card_expire) ──▶ FieldModel
//!                                                            │
//!        view ◀── indicator ◀── ValidationState ◀── CheckoutSchema
//! ```
//!
//! Every mutation re-runs the schema synchronously. There is no window in
//! which the view shows values and errors from different edits.
//!
//! ## Modules
//!
//! - **model** (`model.rs`): the four raw field values.
//! - **schema** (`schema.rs`): per-field rule chains.
//! - **validation** (`validation.rs`): the per-field error lists and the
//!   overall validity flag.
//! - **email** (`email.rs`): email syntax.
//! - **indicator** (`indicator.rs`): which card icons are lit.
//! - **form** (`form.rs`): props, phase machine, events, submit.
//! - **view** (`view.rs`): what the host draws.
//! - **config** (`config.rs`): accepted brands, CVV length, button label.

pub mod config;
pub mod email;
pub mod form;
pub mod indicator;
pub mod model;
pub mod schema;
pub mod validation;
pub mod view;

pub use config::{ConfigError, FormConfig};
pub use email::is_valid_email;
pub use form::{
    BlockReason, CheckoutForm, CheckoutProps, FormEvent, FormPhase, PhaseTransition,
    SubmitOutcome, TRANSITION_HISTORY_LIMIT,
};
pub use indicator::{card_icons, cvv_icon, CardIcon, IconKind};
pub use model::FieldModel;
pub use schema::{CheckoutSchema, FieldSchema, Rule};
pub use validation::ValidationState;
pub use view::{CheckoutView, FieldView, IconView, SubmitView};
