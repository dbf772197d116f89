//! # Checkout Form Shell
//!
//! Owns one form instance: props from the host, the field model, the
//! current validation state, and the form's phase.
//!
//! ## Phases
//!
//! ```text
//! Pristine ──▶ Editing ──▶ Invalid ◀──▶ Editing ──▶ Valid ──▶ Submitted
//!                 ▲                                   │          │
//!                 └───────────────────────────────────┴──────────┘
//! ```
//!
//! Every input passes through `Editing` and lands on `Valid` or `Invalid`
//! once the schema has re-run. A submit from `Valid` (and not loading)
//! moves to `Submitted`. `Submitted` is not terminal: the next input
//! resumes editing.
//!
//! ## Submit Contract
//!
//! `on_success` runs only when every field is valid and the host has not
//! flagged the form as loading, and it runs exactly once per accepted
//! submit. A blocked submit is reported as a [`SubmitOutcome`], never as an
//! error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use checkout_card::{CardFormatter, CardUtils, CardValidator};
use checkout_core::{CardBrand, CheckoutValues, FieldName};

use crate::config::FormConfig;
use crate::indicator::{card_icons, cvv_icon, CardIcon};
use crate::model::FieldModel;
use crate::schema::CheckoutSchema;
use crate::validation::ValidationState;
use crate::view::CheckoutView;

/// Number of phase changes kept in [`CheckoutForm::transitions`].
pub const TRANSITION_HISTORY_LIMIT: usize = 64;

// ─── Props ───────────────────────────────────────────────────────────

/// Callback invoked with the submitted values.
pub type SuccessCallback = Box<dyn FnMut(CheckoutValues) + Send>;

/// Inputs supplied by the host.
pub struct CheckoutProps {
    on_success: SuccessCallback,
    /// While true the submit button is disabled.
    pub loading: bool,
    /// Label of the submit button.
    pub submit_text: String,
}

impl CheckoutProps {
    /// Props with the given success callback, not loading, labelled
    /// `Submit`.
    pub fn new(on_success: impl FnMut(CheckoutValues) + Send + 'static) -> Self {
        Self {
            on_success: Box::new(on_success),
            loading: false,
            submit_text: "Submit".to_string(),
        }
    }

    /// Props labelled from `config`.
    pub fn from_config(
        config: &FormConfig,
        on_success: impl FnMut(CheckoutValues) + Send + 'static,
    ) -> Self {
        Self::new(on_success).with_submit_text(config.submit_text.clone())
    }

    /// Set the loading flag.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the submit button label.
    pub fn with_submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_text = text.into();
        self
    }
}

impl std::fmt::Debug for CheckoutProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutProps")
            .field("loading", &self.loading)
            .field("submit_text", &self.submit_text)
            .finish_non_exhaustive()
    }
}

// ─── Phase ───────────────────────────────────────────────────────────

/// Lifecycle phase of a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    /// No input received yet.
    Pristine,
    /// An input is being applied.
    Editing,
    /// At least one field fails its rules.
    Invalid,
    /// Every field passes its rules.
    Valid,
    /// The last submit was accepted.
    Submitted,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pristine => "PRISTINE",
            Self::Editing => "EDITING",
            Self::Invalid => "INVALID",
            Self::Valid => "VALID",
            Self::Submitted => "SUBMITTED",
        };
        f.write_str(s)
    }
}

/// Record of a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase before the change.
    pub from: FormPhase,
    /// Phase after the change.
    pub to: FormPhase,
}

// ─── Events and outcomes ─────────────────────────────────────────────

/// An event dispatched by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed the text of an input.
    Change {
        /// Input that changed.
        field: FieldName,
        /// Text now in the input.
        value: String,
    },
    /// The user submitted the form.
    Submit,
}

/// Why a submit was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// At least one field is invalid.
    Invalid,
    /// The host flagged the form as loading.
    Loading,
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => f.write_str("form has invalid fields"),
            Self::Loading => f.write_str("form is loading"),
        }
    }
}

/// Result of a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// `on_success` was invoked with these values.
    Submitted(CheckoutValues),
    /// The submit control was disabled; nothing was invoked.
    Blocked(BlockReason),
}

// ─── Form ────────────────────────────────────────────────────────────

/// A headless checkout form instance.
pub struct CheckoutForm {
    props: CheckoutProps,
    schema: CheckoutSchema,
    accepted_brands: Vec<CardBrand>,
    validator: Arc<dyn CardValidator>,
    formatter: Arc<dyn CardFormatter>,
    model: FieldModel,
    validation: ValidationState,
    phase: FormPhase,
    transitions: Vec<PhaseTransition>,
}

impl CheckoutForm {
    /// A form with the default configuration and card utilities.
    pub fn new(props: CheckoutProps) -> Self {
        Self::with_config(props, &FormConfig::default())
    }

    /// A form for `config` using the stock card utilities.
    pub fn with_config(props: CheckoutProps, config: &FormConfig) -> Self {
        let utils = Arc::new(CardUtils::new());
        Self::with_capabilities(props, config, utils.clone(), utils)
    }

    /// A form using the given card validator and formatter.
    pub fn with_capabilities(
        props: CheckoutProps,
        config: &FormConfig,
        validator: Arc<dyn CardValidator>,
        formatter: Arc<dyn CardFormatter>,
    ) -> Self {
        let schema = CheckoutSchema::new(config);
        let model = FieldModel::new();
        let validation = schema.validate(&model, validator.as_ref());
        Self {
            props,
            schema,
            accepted_brands: config.allowed_brands.clone(),
            validator,
            formatter,
            model,
            validation,
            phase: FormPhase::Pristine,
            transitions: Vec::new(),
        }
    }

    /// Apply a change event: the two card inputs are rewritten through the
    /// formatter, the others are stored as typed.
    pub fn input(&mut self, field: FieldName, raw: &str) {
        let value = match field {
            FieldName::CardNumber => self.formatter.format_number(raw),
            FieldName::CardExpire => self.formatter.format_expiry(raw),
            FieldName::Email | FieldName::Cvv => raw.to_string(),
        };
        tracing::debug!(field = %field, formatted = field.is_formatted(), "field input");
        self.set_field(field, value);
    }

    /// Store `value` in `field` verbatim and re-validate.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.transition(FormPhase::Editing);
        self.model.set_field(field, value);
        self.revalidate();
    }

    /// Unset `field` and re-validate.
    pub fn unset_field(&mut self, field: FieldName) {
        self.transition(FormPhase::Editing);
        self.model.unset_field(field);
        self.revalidate();
    }

    /// Update the host's loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.props.loading = loading;
    }

    /// Dispatch a host event. Returns the outcome for submits.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Change { field, value } => {
                self.input(field, &value);
                None
            }
            FormEvent::Submit => Some(self.submit()),
        }
    }

    /// Submit the form.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(reason) = self.block_reason() {
            tracing::warn!(%reason, phase = %self.phase, "submit blocked");
            return SubmitOutcome::Blocked(reason);
        }
        let Some(values) = self.model.to_values() else {
            tracing::warn!(phase = %self.phase, "submit blocked: unset field");
            return SubmitOutcome::Blocked(BlockReason::Invalid);
        };

        (self.props.on_success)(values.clone());
        self.transition(FormPhase::Submitted);
        tracing::info!("checkout submitted");
        SubmitOutcome::Submitted(values)
    }

    /// Why submit is currently disabled, if it is.
    pub fn block_reason(&self) -> Option<BlockReason> {
        if self.validation.is_invalid() {
            Some(BlockReason::Invalid)
        } else if self.props.loading {
            Some(BlockReason::Loading)
        } else {
            None
        }
    }

    /// Whether the submit control is disabled.
    pub fn is_submit_disabled(&self) -> bool {
        self.block_reason().is_some()
    }

    /// Icons beside the card-number input.
    pub fn card_icons(&self) -> Vec<CardIcon> {
        card_icons(
            self.model.get(FieldName::CardNumber),
            &self.accepted_brands,
            self.validator.as_ref(),
        )
    }

    /// Icon beside the CVV input.
    pub fn cvv_icon(&self) -> CardIcon {
        cvv_icon()
    }

    /// The renderable view of the current state.
    pub fn view(&self) -> CheckoutView {
        CheckoutView::of(self)
    }

    /// Current field values.
    pub fn model(&self) -> &FieldModel {
        &self.model
    }

    /// Current validation state.
    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Ordered log of the most recent phase changes, oldest first. At most
    /// [`TRANSITION_HISTORY_LIMIT`] entries are kept.
    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    /// Host props.
    pub fn props(&self) -> &CheckoutProps {
        &self.props
    }

    /// The schema this form validates against.
    pub fn schema(&self) -> &CheckoutSchema {
        &self.schema
    }

    fn revalidate(&mut self) {
        self.validation = self.schema.validate(&self.model, self.validator.as_ref());
        let next = if self.validation.is_valid() {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        };
        self.transition(next);
    }

    fn transition(&mut self, to: FormPhase) {
        if self.phase == to {
            return;
        }
        tracing::debug!(from = %self.phase, to = %to, "form phase");
        if self.transitions.len() == TRANSITION_HISTORY_LIMIT {
            self.transitions.remove(0);
        }
        self.transitions.push(PhaseTransition { from: self.phase, to });
        self.phase = to;
    }
}

impl std::fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("props", &self.props)
            .field("phase", &self.phase)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_card::FixedClock;
    use checkout_core::FieldErrorKind;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    type Calls = Arc<Mutex<Vec<CheckoutValues>>>;

    fn make_form(props_loading: bool) -> (CheckoutForm, Calls) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let props = CheckoutProps::new(move |values| sink.lock().unwrap().push(values))
            .with_loading(props_loading);
        let utils = Arc::new(CardUtils::with_clock(FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        )));
        let form =
            CheckoutForm::with_capabilities(props, &FormConfig::default(), utils.clone(), utils);
        (form, calls)
    }

    fn fill_valid(form: &mut CheckoutForm) {
        form.input(FieldName::Email, "you@company.com");
        form.input(FieldName::CardNumber, "4111111111111111");
        form.input(FieldName::CardExpire, "1230");
        form.input(FieldName::Cvv, "123");
    }

    #[test]
    fn starts_pristine_and_invalid() {
        let (form, _) = make_form(false);
        assert_eq!(form.phase(), FormPhase::Pristine);
        assert!(form.validation().is_invalid());
        assert!(form.is_submit_disabled());
        assert!(form.transitions().is_empty());
    }

    #[test]
    fn input_passes_through_editing() {
        let (mut form, _) = make_form(false);
        form.input(FieldName::Email, "you@company.com");
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(
            form.transitions(),
            &[
                PhaseTransition { from: FormPhase::Pristine, to: FormPhase::Editing },
                PhaseTransition { from: FormPhase::Editing, to: FormPhase::Invalid },
            ]
        );
    }

    #[test]
    fn transition_history_is_bounded() {
        let (mut form, _) = make_form(false);
        for i in 0..200 {
            form.input(FieldName::Email, &format!("user{i}@company.com"));
        }
        let history = form.transitions();
        assert_eq!(history.len(), TRANSITION_HISTORY_LIMIT);
        assert_eq!(
            history.last(),
            Some(&PhaseTransition { from: FormPhase::Editing, to: FormPhase::Invalid })
        );
        assert!(history.iter().all(|t| t.from != FormPhase::Pristine));
    }

    #[test]
    fn card_inputs_store_formatted_values() {
        let (mut form, _) = make_form(false);
        form.input(FieldName::CardNumber, "41111111");
        form.input(FieldName::CardExpire, "4");
        assert_eq!(form.model().get(FieldName::CardNumber), Some("4111 1111"));
        assert_eq!(form.model().get(FieldName::CardExpire), Some("04 / "));
    }

    #[test]
    fn other_inputs_store_raw_values() {
        let (mut form, _) = make_form(false);
        form.input(FieldName::Cvv, "12 ");
        assert_eq!(form.model().get(FieldName::Cvv), Some("12 "));
    }

    #[test]
    fn valid_form_submits_once() {
        let (mut form, calls) = make_form(false);
        fill_valid(&mut form);
        assert_eq!(form.phase(), FormPhase::Valid);
        assert!(!form.is_submit_disabled());

        let outcome = form.submit();
        let values = match outcome {
            SubmitOutcome::Submitted(values) => values,
            other => panic!("expected submit, got {other:?}"),
        };
        assert_eq!(values.card_number, "4111 1111 1111 1111");
        assert_eq!(values.card_expire, "12 / 30");
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(calls.lock().unwrap().as_slice(), &[values]);
    }

    #[test]
    fn invalid_form_does_not_submit() {
        let (mut form, calls) = make_form(false);
        fill_valid(&mut form);
        form.input(FieldName::Cvv, "12");
        assert_eq!(form.submit(), SubmitOutcome::Blocked(BlockReason::Invalid));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(form.phase(), FormPhase::Invalid);
    }

    #[test]
    fn loading_blocks_valid_submit() {
        let (mut form, calls) = make_form(true);
        fill_valid(&mut form);
        assert_eq!(form.submit(), SubmitOutcome::Blocked(BlockReason::Loading));
        assert!(calls.lock().unwrap().is_empty());

        form.set_loading(false);
        assert!(matches!(form.submit(), SubmitOutcome::Submitted(_)));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn submitted_is_not_terminal() {
        let (mut form, calls) = make_form(false);
        fill_valid(&mut form);
        form.submit();
        form.input(FieldName::Email, "other@company.com");
        assert_eq!(form.phase(), FormPhase::Valid);
        form.submit();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].email, "other@company.com");
    }

    #[test]
    fn unset_field_reports_empty() {
        let (mut form, _) = make_form(false);
        fill_valid(&mut form);
        form.unset_field(FieldName::Email);
        assert_eq!(form.validation().kinds(FieldName::Email), vec![FieldErrorKind::Empty]);
        assert!(form.is_submit_disabled());
    }

    #[test]
    fn dispatch_routes_events() {
        let (mut form, calls) = make_form(false);
        for (field, value) in [
            (FieldName::Email, "you@company.com"),
            (FieldName::CardNumber, "5500000000000004"),
            (FieldName::CardExpire, "12 / 30"),
            (FieldName::Cvv, "123"),
        ] {
            let out = form.dispatch(FormEvent::Change { field, value: value.to_string() });
            assert!(out.is_none());
        }
        let out = form.dispatch(FormEvent::Submit);
        assert!(matches!(out, Some(SubmitOutcome::Submitted(_))));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn icons_follow_card_number() {
        let (mut form, _) = make_form(false);
        assert!(form.card_icons().iter().all(|icon| !icon.active));
        form.input(FieldName::CardNumber, "5500000000000004");
        let active: Vec<bool> = form.card_icons().iter().map(|icon| icon.active).collect();
        assert_eq!(active, vec![false, true]);
        assert!(form.cvv_icon().active);
    }

    #[test]
    fn props_defaults() {
        let props = CheckoutProps::new(|_| {});
        assert!(!props.loading);
        assert_eq!(props.submit_text, "Submit");
        let config = FormConfig {
            submit_text: "Pay now".to_string(),
            ..FormConfig::default()
        };
        assert_eq!(CheckoutProps::from_config(&config, |_| {}).submit_text, "Pay now");
    }
}
