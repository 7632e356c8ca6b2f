//! Constraint engine backed by the browser's constraint validation API.
//!
//! ARCHITECTURE
//! ============
//! The engine writes each spec's constraints onto the matching input before
//! asking the form for validity. Validity is therefore always computed against
//! the constraints of the state being validated, independent of when the
//! renderer gets around to reconciling the same attributes.

use validity::number::format_number;
use validity::{ConstraintEngine, EngineError, Evaluation, FieldSpec, InputValue};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

pub struct DomEngine {
    form: Option<HtmlFormElement>,
}

impl DomEngine {
    /// Engine over `form`; `None` while the form is not mounted.
    pub fn new(form: Option<HtmlFormElement>) -> Self {
        Self { form }
    }
}

impl ConstraintEngine for DomEngine {
    fn evaluate(&self, specs: &[FieldSpec]) -> Result<Evaluation, EngineError> {
        let form = self.form.as_ref().ok_or(EngineError::Detached)?;

        let mut inputs = Vec::with_capacity(specs.len());
        for spec in specs {
            let input = named_input(form, &spec.name)?;
            apply_spec(&input, spec);
            inputs.push((spec.name.clone(), input));
        }

        if form.check_validity() {
            return Ok(Evaluation::from_messages(Vec::new()));
        }

        let messages = inputs
            .into_iter()
            .filter(|(_, input)| !input.validity().valid())
            .map(|(name, input)| {
                let message = input.validation_message().unwrap_or_default();
                (name, message)
            })
            .collect();

        Ok(Evaluation {
            valid: false,
            messages,
        })
    }
}

fn named_input(form: &HtmlFormElement, name: &str) -> Result<HtmlInputElement, EngineError> {
    let missing = || EngineError::MissingField(name.to_owned());
    let element = form.elements().named_item(name).ok_or_else(missing)?;
    element.dyn_into::<HtmlInputElement>().map_err(|_| missing())
}

fn apply_spec(input: &HtmlInputElement, spec: &FieldSpec) {
    input.set_required(spec.required);
    input.set_disabled(spec.disabled);
    // An empty bound attribute applies no bound.
    input.set_min(&spec.min.map(format_number).unwrap_or_default());
    input.set_max(&spec.max.map(format_number).unwrap_or_default());

    match &spec.value {
        InputValue::Checkbox(checked) => input.set_checked(*checked),
        // Writing "" over a bad-input entry would clear the browser's badInput flag.
        InputValue::Number(text) if !text.is_empty() && input.value() != *text => {
            input.set_value(text);
        }
        InputValue::Number(_) => {}
    }
}
