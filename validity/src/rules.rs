//! Native reimplementation of HTML constraint validation.
//!
//! DESIGN
//! ======
//! Covers the subset of the constraint validation model the widgets use:
//! `required`, `min`, `max` and the implicit `step="1"` of number inputs, plus
//! bad (unparseable) input. Checks run in the browser's reporting order and the
//! first failure supplies the message, using Chromium's English wording so
//! native and in-browser runs render identical error text.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use crate::number::{format_number, parse_number};
use crate::{ConstraintEngine, EngineError, Evaluation, FieldSpec, InputValue};

/// Default step of `<input type="number">`.
const DEFAULT_STEP: f64 = 1.0;

/// Tolerance when deciding whether a value sits on a step boundary.
const STEP_EPSILON: f64 = 1e-9;

/// Rule-based [`ConstraintEngine`] with browser semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRules;

impl ConstraintEngine for HtmlRules {
    fn evaluate(&self, specs: &[FieldSpec]) -> Result<Evaluation, EngineError> {
        let messages = specs
            .iter()
            .filter_map(|spec| check(spec).map(|message| (spec.name.clone(), message)))
            .collect();
        Ok(Evaluation::from_messages(messages))
    }
}

/// Check a single field, returning the message of the first constraint it fails.
fn check(spec: &FieldSpec) -> Option<String> {
    if spec.disabled {
        return None;
    }
    match &spec.value {
        InputValue::Checkbox(checked) => check_checkbox(spec, *checked),
        InputValue::Number(text) => check_number(spec, text),
    }
}

fn check_checkbox(spec: &FieldSpec, checked: bool) -> Option<String> {
    if spec.required && !checked {
        return Some("Please check this box if you want to proceed.".to_owned());
    }
    None
}

fn check_number(spec: &FieldSpec, text: &str) -> Option<String> {
    if text.is_empty() {
        if spec.required {
            return Some("Please fill out this field.".to_owned());
        }
        return None;
    }

    let Some(value) = parse_number(text) else {
        return Some("Please enter a number.".to_owned());
    };

    if let Some(min) = spec.min {
        if value < min {
            return Some(format!("Value must be greater than or equal to {}.", format_number(min)));
        }
    }

    if let Some(max) = spec.max {
        if value > max {
            return Some(format!("Value must be less than or equal to {}.", format_number(max)));
        }
    }

    check_step(spec, value)
}

fn check_step(spec: &FieldSpec, value: f64) -> Option<String> {
    let base = spec.min.unwrap_or(0.0);
    let steps = (value - base) / DEFAULT_STEP;
    if (steps - steps.round()).abs() <= STEP_EPSILON {
        return None;
    }

    let lower = base + steps.floor() * DEFAULT_STEP;
    let upper = lower + DEFAULT_STEP;
    let message = if spec.max.is_some_and(|max| upper > max) {
        format!(
            "Please enter a valid value. The nearest valid value is {}.",
            format_number(lower)
        )
    } else {
        format!(
            "Please enter a valid value. The two nearest valid values are {} and {}.",
            format_number(lower),
            format_number(upper)
        )
    };

    Some(message)
}
