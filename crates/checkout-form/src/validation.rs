//! # Validation State
//!
//! The derived result of running the schema over the field model. Holds an
//! error list for every field (empty when the field is valid) and the
//! overall-invalid flag that gates the submit button.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use checkout_core::{FieldError, FieldErrorKind, FieldName};

/// Per-field errors and overall validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationState {
    errors: BTreeMap<FieldName, Vec<FieldError>>,
    invalid: bool,
}

impl ValidationState {
    /// Build the state from per-field errors. Fields absent from `errors`
    /// are recorded as valid.
    pub fn from_errors(errors: impl IntoIterator<Item = (FieldName, Vec<FieldError>)>) -> Self {
        let mut map: BTreeMap<FieldName, Vec<FieldError>> =
            FieldName::ALL.into_iter().map(|f| (f, Vec::new())).collect();
        for (field, list) in errors {
            map.entry(field).or_default().extend(list);
        }
        let invalid = map.values().any(|list| !list.is_empty());
        Self { errors: map, invalid }
    }

    /// The errors of `field`, empty when it is valid.
    pub fn errors(&self, field: FieldName) -> &[FieldError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// The error kinds of `field`.
    pub fn kinds(&self, field: FieldName) -> Vec<FieldErrorKind> {
        self.errors(field).iter().map(|e| e.kind).collect()
    }

    /// The messages of `field` joined with `,`, or `None` when it is valid.
    pub fn error_text(&self, field: FieldName) -> Option<String> {
        let errors = self.errors(field);
        if errors.is_empty() {
            return None;
        }
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        Some(messages.join(","))
    }

    /// Whether `field` has no errors.
    pub fn field_valid(&self, field: FieldName) -> bool {
        self.errors(field).is_empty()
    }

    /// Whether any field has an error.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Whether every field is valid.
    pub fn is_valid(&self) -> bool {
        !self.invalid
    }

    /// Fields that currently have errors, in render order.
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.errors
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }
}
