//! Price form values, derived constraints, and validation errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form has a range toggle plus three prices. Whether `minPrice` and
//! `maxPrice` take part in validation, and the bounds every price is checked
//! against, are derived from the current values on every pass.
//!
//! ORDERING
//! ========
//! [`PriceFormState::change`] commits the new value and then runs the
//! validation pass inside the same `&mut self` call. Constraints are derived
//! from the committed values, never from what was last rendered, so a change
//! to one side of the min/max pair is immediately visible to the other.

#[cfg(test)]
#[path = "price_form_test.rs"]
mod price_form_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use validity::number::{format_number, parse_number};
use validity::{ConstraintEngine, EngineError, FieldSpec};

use super::submission::Submission;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("field `{field}` takes a {expected} value")]
    KindMismatch {
        field: FieldName,
        expected: &'static str,
    },
    #[error("form has {} invalid field(s)", .fields.len())]
    Invalid { fields: Vec<FieldName> },
    #[error("validation unavailable: {0}")]
    Engine(#[from] EngineError),
}

/// Inputs of the price form, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    HasPriceRange,
    MinPrice,
    MaxPrice,
    RecomPrice,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::HasPriceRange,
        FieldName::MinPrice,
        FieldName::MaxPrice,
        FieldName::RecomPrice,
    ];

    /// The input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HasPriceRange => "hasPriceRange",
            Self::MinPrice => "minPrice",
            Self::MaxPrice => "maxPrice",
            Self::RecomPrice => "recomPrice",
        }
    }

    pub fn is_checkbox(self) -> bool {
        self == Self::HasPriceRange
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_owned()))
    }
}

/// A price as the form holds it: the numeric seed until the user edits it,
/// then whatever text the input reported.
#[derive(Clone, Debug, PartialEq)]
pub enum PriceValue {
    Seed(f64),
    Raw(String),
}

impl PriceValue {
    /// Text shown in the input and submitted with the form.
    pub fn text(&self) -> String {
        match self {
            Self::Seed(value) => format_number(*value),
            Self::Raw(text) => text.clone(),
        }
    }

    /// Numeric value, or `None` for empty or non-numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Seed(value) => Some(*value),
            Self::Raw(text) => parse_number(text),
        }
    }
}

/// A change event's payload.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldInput {
    Checked(bool),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormValues {
    pub has_price_range: bool,
    pub min_price: PriceValue,
    pub max_price: PriceValue,
    pub recom_price: PriceValue,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            has_price_range: true,
            min_price: PriceValue::Seed(0.0),
            max_price: PriceValue::Seed(100.0),
            recom_price: PriceValue::Seed(50.0),
        }
    }
}

impl FormValues {
    /// Replace one field, rejecting payloads of the wrong kind.
    pub fn apply(&mut self, field: FieldName, input: FieldInput) -> Result<(), FormError> {
        match (field, input) {
            (FieldName::HasPriceRange, FieldInput::Checked(checked)) => {
                self.has_price_range = checked;
            }
            (FieldName::MinPrice, FieldInput::Text(text)) => self.min_price = PriceValue::Raw(text),
            (FieldName::MaxPrice, FieldInput::Text(text)) => self.max_price = PriceValue::Raw(text),
            (FieldName::RecomPrice, FieldInput::Text(text)) => {
                self.recom_price = PriceValue::Raw(text);
            }
            (field, _) => {
                return Err(FormError::KindMismatch {
                    field,
                    expected: if field.is_checkbox() { "checked" } else { "text" },
                });
            }
        }
        Ok(())
    }

    /// Current value of a price field; `None` for the checkbox.
    pub fn price(&self, field: FieldName) -> Option<&PriceValue> {
        match field {
            FieldName::HasPriceRange => None,
            FieldName::MinPrice => Some(&self.min_price),
            FieldName::MaxPrice => Some(&self.max_price),
            FieldName::RecomPrice => Some(&self.recom_price),
        }
    }

    /// Constraints for every input under the current values, in document order.
    ///
    /// With the range off, `minPrice` and `maxPrice` are disabled and
    /// unconstrained, and `recomPrice` is only required.
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        let range = self.has_price_range;
        let lower = if range { self.min_price.as_number() } else { None };
        let upper = if range { self.max_price.as_number() } else { None };

        vec![
            FieldSpec::checkbox(FieldName::HasPriceRange.as_str(), range),
            FieldSpec::number(FieldName::MinPrice.as_str(), self.min_price.text())
                .required(range)
                .max(upper)
                .disabled(!range),
            FieldSpec::number(FieldName::MaxPrice.as_str(), self.max_price.text())
                .required(range)
                .min(lower)
                .disabled(!range),
            FieldSpec::number(FieldName::RecomPrice.as_str(), self.recom_price.text())
                .required(true)
                .min(lower)
                .max(upper),
        ]
    }

    /// Constraints for a single input.
    pub fn spec_for(&self, field: FieldName) -> Option<FieldSpec> {
        self.field_specs()
            .into_iter()
            .find(|spec| spec.name == field.as_str())
    }
}

/// Message per currently failing field.
pub type FormErrors = BTreeMap<FieldName, String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceFormState {
    pub values: FormValues,
    pub errors: FormErrors,
}

impl PriceFormState {
    /// Commit a change, then run a validation pass against the committed values.
    ///
    /// # Errors
    ///
    /// [`FormError::KindMismatch`] leaves the form untouched.
    /// [`FormError::Engine`] means the value was committed but the errors were
    /// not recomputed.
    pub fn change(
        &mut self,
        field: FieldName,
        input: FieldInput,
        engine: &impl ConstraintEngine,
    ) -> Result<(), FormError> {
        self.values.apply(field, input)?;
        self.validate(engine)?;
        Ok(())
    }

    /// [`Self::change`] addressed by the input's `name` attribute.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownField`] when `name` is not one of the form's inputs.
    pub fn change_named(
        &mut self,
        name: &str,
        input: FieldInput,
        engine: &impl ConstraintEngine,
    ) -> Result<(), FormError> {
        let field = name.parse::<FieldName>()?;
        self.change(field, input, engine)
    }

    /// Re-evaluate every field and replace the error map wholesale.
    ///
    /// Returns whole-form validity.
    ///
    /// # Errors
    ///
    /// [`FormError::Engine`] when the engine cannot evaluate; errors are left
    /// as they were.
    pub fn validate(&mut self, engine: &impl ConstraintEngine) -> Result<bool, FormError> {
        let evaluation = engine.evaluate(&self.values.field_specs())?;
        if evaluation.valid {
            self.errors.clear();
            return Ok(true);
        }

        let mut errors = FormErrors::new();
        for (name, message) in evaluation.messages {
            match name.parse::<FieldName>() {
                Ok(field) => {
                    errors.insert(field, message);
                }
                Err(err) => log::warn!("dropping validation message: {err}"),
            }
        }
        self.errors = errors;
        Ok(false)
    }

    /// Validate, then encode the form the way the browser would submit it.
    ///
    /// # Errors
    ///
    /// [`FormError::Invalid`] lists the failing fields, whose messages stay
    /// in [`Self::errors`]. [`FormError::Engine`] when validation is unavailable.
    pub fn submit(&mut self, engine: &impl ConstraintEngine) -> Result<Submission, FormError> {
        if !self.validate(engine)? {
            return Err(FormError::Invalid {
                fields: self.errors.keys().copied().collect(),
            });
        }
        let submission = Submission::from_specs(&self.values.field_specs());
        log::info!("price form submitted: {}", submission.to_json());
        Ok(submission)
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
