//! # View Model
//!
//! Everything a host needs to draw the form, derived from the current
//! state. Every field with a non-empty error list shows its error text,
//! a fresh form included.

use std::fmt;

use serde::Serialize;

use checkout_core::{CardBrand, FieldName};

use crate::form::{CheckoutForm, FormPhase};
use crate::indicator::{CardIcon, IconKind};

/// Static presentation of an input.
struct Presentation {
    label: Option<&'static str>,
    input_type: &'static str,
    placeholder: &'static str,
    autocomplete: Option<&'static str>,
}

fn presentation(field: FieldName) -> Presentation {
    match field {
        FieldName::Email => Presentation {
            label: Some("Email"),
            input_type: "email",
            placeholder: "you@company.com",
            autocomplete: Some("current-email"),
        },
        FieldName::CardNumber => Presentation {
            label: Some("Card information"),
            input_type: "text",
            placeholder: "1234 1234 1234 1234",
            autocomplete: None,
        },
        FieldName::CardExpire => Presentation {
            label: None,
            input_type: "text",
            placeholder: "MM / YY",
            autocomplete: None,
        },
        FieldName::Cvv => Presentation {
            label: None,
            input_type: "text",
            placeholder: "123",
            autocomplete: None,
        },
    }
}

/// A card icon as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconView {
    /// Brand depicted, `None` for the generic icon.
    pub brand: Option<CardBrand>,
    /// Whether the icon is highlighted.
    pub active: bool,
    /// Rendered opacity.
    pub opacity: f32,
    /// Swatch colour.
    pub color: &'static str,
}

impl From<CardIcon> for IconView {
    fn from(icon: CardIcon) -> Self {
        let brand = match icon.kind {
            IconKind::Brand(brand) => Some(brand),
            IconKind::Generic => None,
        };
        Self {
            brand,
            active: icon.active,
            opacity: icon.opacity(),
            color: icon.color(),
        }
    }
}

/// One input as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    /// Field key.
    pub name: FieldName,
    /// Label above the input, if the input has one.
    pub label: Option<&'static str>,
    /// HTML input type.
    pub input_type: &'static str,
    /// Placeholder text.
    pub placeholder: &'static str,
    /// Autocomplete hint.
    pub autocomplete: Option<&'static str>,
    /// Current value.
    pub value: String,
    /// Whether the label is drawn in the error style.
    pub label_error: bool,
    /// Inline error text beneath the input.
    pub error: Option<String>,
    /// Icons drawn inside the input.
    pub icons: Vec<IconView>,
}

/// The submit button as drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitView {
    /// Button label.
    pub text: String,
    /// Whether the button is disabled.
    pub disabled: bool,
}

/// The whole form as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutView {
    /// Current phase.
    pub phase: FormPhase,
    /// Inputs in render order.
    pub fields: Vec<FieldView>,
    /// Submit button.
    pub submit: SubmitView,
}

impl CheckoutView {
    /// Derive the view of `form`.
    pub fn of(form: &CheckoutForm) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| {
                let p = presentation(name);
                let error = form.validation().error_text(name);
                let icons: Vec<IconView> = match name {
                    FieldName::CardNumber => {
                        form.card_icons().into_iter().map(IconView::from).collect()
                    }
                    FieldName::Cvv => vec![form.cvv_icon().into()],
                    FieldName::Email | FieldName::CardExpire => Vec::new(),
                };
                FieldView {
                    name,
                    label: p.label,
                    input_type: p.input_type,
                    placeholder: p.placeholder,
                    autocomplete: p.autocomplete,
                    value: form.model().display_value(name).to_string(),
                    label_error: p.label.is_some() && error.is_some(),
                    error,
                    icons,
                }
            })
            .collect();

        Self {
            phase: form.phase(),
            fields,
            submit: SubmitView {
                text: form.props().submit_text.clone(),
                disabled: form.is_submit_disabled(),
            },
        }
    }

    /// The view of one input.
    pub fn field(&self, name: FieldName) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl fmt::Display for CheckoutView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            if let Some(label) = field.label {
                let marker = if field.label_error { " !" } else { "" };
                writeln!(f, "{label}{marker}")?;
            }
            if field.value.is_empty() {
                write!(f, "  > ({})", field.placeholder)?;
            } else {
                write!(f, "  > {}", field.value)?;
            }
            for icon in &field.icons {
                let name = icon.brand.map_or("card", |b| b.as_str());
                let lit = if icon.active { '*' } else { ' ' };
                write!(f, " [{name}{lit}]")?;
            }
            writeln!(f)?;
            if let Some(error) = &field.error {
                writeln!(f, "    {error}")?;
            }
        }
        let state = if self.submit.disabled { " (disabled)" } else { "" };
        write!(f, "[ {} ]{state}", self.submit.text)
    }
}
