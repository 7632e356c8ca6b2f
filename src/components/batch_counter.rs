//! Counter whose buttons apply a batch of unit reducer dispatches.

use leptos::prelude::*;

use crate::state::counter::{CounterReducer, CounterState};
use crate::state::store::Store;

#[cfg(test)]
#[path = "batch_counter_test.rs"]
mod batch_counter_test;

pub fn button_label(verb: &str, step: u32) -> String {
    format!("{verb} {step}")
}

/// Store backing the widget; traces every unit transition.
pub fn counter_store() -> Store<CounterReducer> {
    Store::default().with_listener(|state: &CounterState| {
        log::trace!("counter transition -> {}", state.count);
    })
}

#[component]
pub fn BatchCounter(#[prop(default = 3)] step: u32) -> impl IntoView {
    // The boxed listener is not `Send`, so the store lives in local storage.
    let store = RwSignal::new_local(counter_store());

    // Diagnostic trace once per render pass.
    Effect::new(move || {
        store.with(|store| {
            log::debug!(
                "batch counter render (count = {}, dispatches = {})",
                store.state().count,
                store.dispatch_count()
            );
        });
    });

    view! {
        <button on:click=move |_| store.update(|store| {
            store.add(step);
        })>{button_label("Add", step)}</button>
        <button on:click=move |_| store.update(|store| {
            store.subtract(step);
        })>{button_label("Subtract", step)}</button>
        <span>{move || store.with(|store| store.state().count)}</span>
    }
}
