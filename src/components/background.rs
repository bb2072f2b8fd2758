//! Page Background
//!
//! Fixed full-viewport layer drawn from the config, with a dark overlay
//! for readability.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Background() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div
            class="page-background"
            style=move || store.config().with(|config| config.background_style())
        ></div>
        <div class="page-overlay"></div>
    }
}
