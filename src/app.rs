//! Layered UI App
//!
//! Root component: owns the session store and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Background, CardFeed, EditorPanel, ScrollProgressBar};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    view! {
        <div class="page">
            // Top: scroll progress
            <ScrollProgressBar />

            // Behind everything: background + overlay
            <Background />

            // Center: card feed
            <main class="main-content">
                <CardFeed />
            </main>

            // Bottom right: editor
            <EditorPanel />

            <footer class="page-footer">
                <p>"© 2024 Layered Experience. All rights reserved."</p>
            </footer>
        </div>
    }
}
