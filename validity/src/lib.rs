//! Constraint model and validation engines for HTML-style form inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets describe each input as a [`FieldSpec`] (current value plus the
//! `required`/`min`/`max`/`disabled` constraints that apply right now) and ask
//! a [`ConstraintEngine`] whether the set is valid. The browser's constraint
//! validation API is one engine; [`rules::HtmlRules`] reimplements the same
//! semantics natively so widget logic can run and be tested off-browser.
//!
//! This crate has no UI dependencies.

pub mod number;
pub mod rules;


use serde::{Deserialize, Serialize};

/// Error returned when an engine cannot evaluate a field set at all.
///
/// Individual field failures are not errors; they are reported through
/// [`Evaluation::messages`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The form backing the engine is not mounted.
    #[error("form element is not mounted")]
    Detached,
    /// A spec names an input the backing form does not contain.
    #[error("no input named `{0}` in form")]
    MissingField(String),
}

/// Current value of an input element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum InputValue {
    /// `<input type="checkbox">` checkedness.
    Checkbox(bool),
    /// `<input type="number">` raw text, possibly empty or non-numeric.
    Number(String),
}

/// One input element together with the constraints currently applied to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The `name` attribute.
    pub name: String,
    pub value: InputValue,
    pub required: bool,
    /// Lower bound. `None` when the attribute is absent or not a valid number.
    pub min: Option<f64>,
    /// Upper bound. `None` when the attribute is absent or not a valid number.
    pub max: Option<f64>,
    /// Disabled inputs are barred from constraint validation.
    pub disabled: bool,
}

impl FieldSpec {
    /// Unconstrained checkbox input.
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self::with_value(name, InputValue::Checkbox(checked))
    }

    /// Unconstrained number input holding raw `text`.
    pub fn number(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_value(name, InputValue::Number(text.into()))
    }

    fn with_value(name: impl Into<String>, value: InputValue) -> Self {
        Self {
            name: name.into(),
            value,
            required: false,
            min: None,
            max: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn min(mut self, min: Option<f64>) -> Self {
        self.min = min;
        self
    }

    #[must_use]
    pub fn max(mut self, max: Option<f64>) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Result of evaluating a field set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whole-form validity (`form.checkValidity()`).
    pub valid: bool,
    /// `(name, validationMessage)` for every failing field, in document order.
    pub messages: Vec<(String, String)>,
}

impl Evaluation {
    /// Build an evaluation from the failing fields; no failures means valid.
    #[must_use]
    pub fn from_messages(messages: Vec<(String, String)>) -> Self {
        Self {
            valid: messages.is_empty(),
            messages,
        }
    }
}

/// Something that can decide whether a set of inputs satisfies its constraints.
///
/// Engines must treat the specs as the authoritative constraint set: whatever
/// attributes a previous call applied are stale once a new call begins.
pub trait ConstraintEngine {
    /// Evaluate every spec and report whole-form validity plus per-field messages.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the backing form cannot be consulted.
    fn evaluate(&self, specs: &[FieldSpec]) -> Result<Evaluation, EngineError>;
}

impl<T: ConstraintEngine + ?Sized> ConstraintEngine for &T {
    fn evaluate(&self, specs: &[FieldSpec]) -> Result<Evaluation, EngineError> {
        (**self).evaluate(specs)
    }
}
