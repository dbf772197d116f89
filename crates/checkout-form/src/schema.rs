//! # Checkout Schema
//!
//! Declarative rule chains, one per field. Evaluation of a field stops at
//! the first failing rule, and the required check always runs first, so a
//! field carries at most one error and an empty field only ever reports
//! `EMPTY`.
//!
//! | Field | Chain |
//! |-------|-------|
//! | email | required → email syntax |
//! | card_number | required → checksum → accepted brand |
//! | card_expire | required → `MM / YY` split → not expired |
//! | cvv | required → exact length → CVC check |

use checkout_card::{split_expiry, CardValidator};
use checkout_core::{CardBrand, FieldError, FieldErrorKind, FieldName};

use crate::config::FormConfig;
use crate::email::is_valid_email;
use crate::model::FieldModel;
use crate::validation::ValidationState;

/// A single check applied to a non-empty field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Syntactically valid email address.
    Email,
    /// Structurally valid card number with a passing checksum.
    CardChecksum,
    /// Card brand is one of `brands`.
    AcceptedBrand {
        /// Brands the number may belong to.
        brands: Vec<CardBrand>,
        /// Message reported on failure.
        message: String,
    },
    /// `MM / YY` expiry that has not passed.
    ExpiryNotPast,
    /// Exactly `length` characters.
    ExactLength {
        /// Required number of characters.
        length: usize,
        /// Message reported on failure.
        message: String,
    },
    /// Valid verification code for the current card's brand.
    Cvc,
}

impl Rule {
    /// Apply the rule to `value`. `model` supplies cross-field context (the
    /// CVC check needs the card brand).
    pub fn check(
        &self,
        value: &str,
        model: &FieldModel,
        validator: &dyn CardValidator,
    ) -> Result<(), FieldError> {
        match self {
            Self::Email => {
                if !is_valid_email(value) {
                    return Err(FieldError::new(FieldErrorKind::InvalidFormat));
                }
            }
            Self::CardChecksum => {
                if !validator.checksum_valid(value) {
                    return Err(FieldError::new(FieldErrorKind::InvalidNumber));
                }
            }
            Self::AcceptedBrand { brands, message } => {
                let accepted = validator
                    .brand_of(value)
                    .is_some_and(|brand| brands.contains(&brand));
                if !accepted {
                    return Err(FieldError::with_message(
                        FieldErrorKind::UnsupportedBrand,
                        message.clone(),
                    ));
                }
            }
            Self::ExpiryNotPast => {
                let valid = split_expiry(value)
                    .is_some_and(|(month, year)| validator.expiry_valid(month, year));
                if !valid {
                    return Err(FieldError::new(FieldErrorKind::InvalidDate));
                }
            }
            Self::ExactLength { length, message } => {
                if value.chars().count() != *length {
                    return Err(FieldError::with_message(
                        FieldErrorKind::WrongLength,
                        message.clone(),
                    ));
                }
            }
            Self::Cvc => {
                let brand = model
                    .get(FieldName::CardNumber)
                    .and_then(|number| validator.brand_of(number));
                if !validator.cvc_valid(value, brand) {
                    return Err(FieldError::new(FieldErrorKind::InvalidCvv));
                }
            }
        }
        Ok(())
    }
}

/// The rule chain of one field. The required check is implicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Field the chain applies to.
    pub field: FieldName,
    /// Rules run after the required check, in order.
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    /// The first failure of the chain against the current model, if any.
    pub fn check(&self, model: &FieldModel, validator: &dyn CardValidator) -> Option<FieldError> {
        let value = match model.get(self.field) {
            Some(v) if !v.is_empty() => v,
            _ => return Some(FieldError::new(FieldErrorKind::Empty)),
        };
        self.rules
            .iter()
            .find_map(|rule| rule.check(value, model, validator).err())
    }
}

/// Rule chains for all four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSchema {
    fields: Vec<FieldSchema>,
}

impl CheckoutSchema {
    /// The checkout schema for `config`.
    pub fn new(config: &FormConfig) -> Self {
        let fields = vec![
            FieldSchema {
                field: FieldName::Email,
                rules: vec![Rule::Email],
            },
            FieldSchema {
                field: FieldName::CardNumber,
                rules: vec![
                    Rule::CardChecksum,
                    Rule::AcceptedBrand {
                        brands: config.allowed_brands.clone(),
                        message: config.unsupported_brand_message(),
                    },
                ],
            },
            FieldSchema {
                field: FieldName::CardExpire,
                rules: vec![Rule::ExpiryNotPast],
            },
            FieldSchema {
                field: FieldName::Cvv,
                rules: vec![
                    Rule::ExactLength {
                        length: config.cvv_length,
                        message: config.wrong_length_message(),
                    },
                    Rule::Cvc,
                ],
            },
        ];
        Self { fields }
    }

    /// The chain for `field`.
    pub fn field(&self, field: FieldName) -> Option<&FieldSchema> {
        self.fields.iter().find(|schema| schema.field == field)
    }

    /// Evaluate every chain against `model`.
    pub fn validate(&self, model: &FieldModel, validator: &dyn CardValidator) -> ValidationState {
        ValidationState::from_errors(self.fields.iter().map(|schema| {
            let errors: Vec<FieldError> = schema.check(model, validator).into_iter().collect();
            (schema.field, errors)
        }))
    }
}

impl Default for CheckoutSchema {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}
