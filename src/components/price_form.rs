//! Price form with a range toggle and three cross-validated prices.
//!
//! ARCHITECTURE
//! ============
//! Every input event becomes one `RwSignal::update` that commits the value and
//! re-validates inside the same closure. Native validation popups are off
//! (`novalidate`); the browser still computes validity and the messages are
//! rendered next to each field.

use leptos::prelude::*;
use validity::number::format_number;

use crate::state::price_form::{FieldInput, FieldName, PriceFormState, PriceValue};

#[cfg(test)]
#[path = "price_form_test.rs"]
mod price_form_test;

/// `id` of the element holding `field`'s error text.
pub fn error_id(field: FieldName) -> String {
    format!("{field}Error")
}

/// Attribute text for an optional bound; empty means no bound.
pub fn bound_attr(bound: Option<f64>) -> String {
    bound.map(format_number).unwrap_or_default()
}

pub fn field_label(field: FieldName) -> &'static str {
    match field {
        FieldName::HasPriceRange => "Has Price Range?",
        FieldName::MinPrice => "Min Price",
        FieldName::MaxPrice => "Max Price",
        FieldName::RecomPrice => "Recommended Price",
    }
}

/// Text a price input is created with. After mount the input owns its text,
/// so a partial entry the browser reports as `""` is never written back.
pub fn initial_text(form: &PriceFormState, field: FieldName) -> String {
    form.values.price(field).map(PriceValue::text).unwrap_or_default()
}

fn error_text(state: RwSignal<PriceFormState>, field: FieldName) -> String {
    state.with(|form| form.error(field).map(str::to_owned).unwrap_or_default())
}

fn price_field<F>(field: FieldName, state: RwSignal<PriceFormState>, on_change: F) -> impl IntoView
where
    F: Fn(FieldName, FieldInput) + Copy + 'static,
{
    let name = field.as_str();
    let spec = move || state.with(|form| form.values.spec_for(field));

    view! {
        <div>
            <label for=name>{field_label(field)}</label>
            <input
                id=name
                type="number"
                name=name
                aria-errormessage=error_id(field)
                value=state.with_untracked(|form| initial_text(form, field))
                on:input=move |ev| on_change(field, FieldInput::Text(event_target_value(&ev)))
                min=move || bound_attr(spec().and_then(|s| s.min))
                max=move || bound_attr(spec().and_then(|s| s.max))
                required=move || spec().is_some_and(|s| s.required)
                disabled=move || spec().is_some_and(|s| s.disabled)
            />
            <span id=error_id(field)>{move || error_text(state, field)}</span>
        </div>
    }
}

#[component]
pub fn PriceForm() -> impl IntoView {
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let state = RwSignal::new(PriceFormState::default());

    #[cfg(feature = "csr")]
    let engine = move || crate::util::dom_validity::DomEngine::new(form_ref.get_untracked());
    #[cfg(not(feature = "csr"))]
    let engine = || validity::rules::HtmlRules;

    let on_change = move |field: FieldName, input: FieldInput| {
        state.update(|form| {
            if let Err(err) = form.change(field, input, &engine()) {
                log::warn!("{field} change not validated: {err}");
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|form| {
            if let Err(err) = form.submit(&engine()) {
                log::warn!("price form not submitted: {err}");
            }
        });
    };

    let range = FieldName::HasPriceRange;

    view! {
        <form node_ref=form_ref novalidate=true on:submit=on_submit>
            <div>
                <input
                    id=range.as_str()
                    type="checkbox"
                    name=range.as_str()
                    aria-errormessage=error_id(range)
                    prop:checked=move || state.with(|form| form.values.has_price_range)
                    on:change=move |ev| on_change(range, FieldInput::Checked(event_target_checked(&ev)))
                />
                <label for=range.as_str()>{field_label(range)}</label>
                <span id=error_id(range)>{move || error_text(state, range)}</span>
            </div>
            {price_field(FieldName::MinPrice, state, on_change)}
            {price_field(FieldName::MaxPrice, state, on_change)}
            {price_field(FieldName::RecomPrice, state, on_change)}
            <button type="submit">"Submit"</button>
        </form>
    }
}
