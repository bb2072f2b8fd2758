//! Editor Panel
//!
//! Floating panel in the bottom-right corner. Collapsed it is a single
//! settings button; expanded it holds background settings, the layer list,
//! recent activity and the export action.

use leptos::prelude::*;

use crate::commands;
use crate::components::{ActivityLog, ChoiceButtons, LayerEditor, BACKGROUND_MODES};
use crate::editor::EXPORT_FILE_NAME;
use crate::models::{BackgroundMode, ConfigPatch};
use crate::store::{
    store_add_card, store_close_panel, store_export_snapshot, store_open_panel,
    store_update_config, use_app_store, AppStateStoreFields, AppStore,
};

/// Serialize the session and hand it to the browser as a download
fn export_config(store: &AppStore) {
    match store_export_snapshot(store) {
        Ok(json) => {
            log::info!("[EXPORT] Saving {} bytes as {}", json.len(), EXPORT_FILE_NAME);
            if let Err(e) = commands::save_json_file(EXPORT_FILE_NAME, &json) {
                log::error!("[EXPORT] {}", e);
            }
        }
        Err(e) => log::error!("[EXPORT] Failed to serialize snapshot: {}", e),
    }
}

#[component]
fn BackgroundSettings() -> impl IntoView {
    let store = use_app_store();
    let mode = move || store.config().with(|config| config.background_mode);

    view! {
        <section class="panel-section">
            <h4 class="section-title">"🎨 Background Settings"</h4>
            <ChoiceButtons
                options=BACKGROUND_MODES
                current=Signal::derive(move || mode().as_str().to_string())
                on_change=move |value: String| {
                    store_update_config(&store, ConfigPatch::mode(BackgroundMode::from_str(&value)))
                }
            />
            <input
                type="text"
                class="text-input"
                placeholder=move || mode().placeholder()
                prop:value=move || store.config().with(|config| config.background_value.clone())
                on:input=move |ev| store_update_config(&store, ConfigPatch::value(event_target_value(&ev)))
            />
        </section>
    }
}

#[component]
fn LayerList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="panel-section">
            <div class="section-header">
                <h4 class="section-title">
                    {move || format!("☰ Layers ({})", store.cards().with(|cards| cards.len()))}
                </h4>
                <button
                    class="add-btn"
                    title="Add layer"
                    on:click=move |_| {
                        store_add_card(&store);
                    }
                >
                    "+"
                </button>
            </div>
            <div class="layer-list">
                <For
                    each=move || store.cards().with(|cards| cards.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
                    key=|id| id.clone()
                    children=move |id| view! { <LayerEditor card_id=id /> }
                />
            </div>
        </section>
    }
}

#[component]
pub fn EditorPanel() -> impl IntoView {
    let store = use_app_store();
    let expanded = move || store.panel().get().is_expanded();

    view! {
        <div class=move || if expanded() { "editor-panel expanded" } else { "editor-panel" }>
            <Show
                when=expanded
                fallback=move || view! {
                    <button
                        class="panel-toggle"
                        title="Open editor"
                        on:click=move |_| store_open_panel(&store)
                    >
                        "⚙"
                    </button>
                }
            >
                <div class="panel-body">
                    <div class="panel-header">
                        <h3>"☰ Design Editor"</h3>
                        <button
                            class="close-btn"
                            title="Close editor"
                            on:click=move |_| store_close_panel(&store)
                        >
                            "⌄"
                        </button>
                    </div>

                    <div class="panel-content">
                        <BackgroundSettings />
                        <LayerList />
                        <ActivityLog />
                    </div>

                    <div class="panel-footer">
                        <button class="export-btn" on:click=move |_| export_config(&store)>
                            "Export Config"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
