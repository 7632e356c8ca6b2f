//! Page shell composing the greeting and both widgets.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::{batch_counter::BatchCounter, price_form::PriceForm};
use crate::config::AppConfig;

/// Root application component.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    let AppConfig {
        greeting_name,
        batch_step,
        ..
    } = config;

    view! {
        <Stylesheet id="pricebatch" href="/style.css"/>
        <Title text="Price form"/>

        <div>
            <h1>"Hello " {greeting_name} "!"</h1>
            <p>"Start editing to see some magic happen :)"</p>
            <PriceForm/>
            <BatchCounter step=batch_step/>
        </div>
    }
}
