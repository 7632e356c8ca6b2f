//! Form-encoded submission of a field set.
//!
//! Follows the browser's form data construction: document order, disabled
//! inputs skipped, a checkbox contributes `name=on` only while checked (no
//! unchecked value is configured).

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use serde::Serialize;
use serde_json::{Map, Value};
use validity::{FieldSpec, InputValue};

/// Value a checked checkbox submits when it has no `value` attribute.
pub const CHECKBOX_ON: &str = "on";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    entries: Vec<(String, String)>,
}

impl Submission {
    pub fn from_specs(specs: &[FieldSpec]) -> Self {
        let entries = specs
            .iter()
            .filter(|spec| !spec.disabled)
            .filter_map(|spec| match &spec.value {
                InputValue::Checkbox(true) => Some((spec.name.clone(), CHECKBOX_ON.to_owned())),
                InputValue::Checkbox(false) => None,
                InputValue::Number(text) => Some((spec.name.clone(), text.clone())),
            })
            .collect();
        Self { entries }
    }

    /// `(name, value)` pairs in document order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Flat JSON object view. A repeated name keeps its last value.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.entries {
            object.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(object)
    }
}
