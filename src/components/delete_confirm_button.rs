//! Delete Confirm Button Component
//!
//! A × button that asks "Delete?" before running the action.

use leptos::prelude::*;

/// Two-step delete: the first click arms the button, ✓ confirms, ✗ disarms.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let button_class = StoredValue::new(button_class);
    let title = StoredValue::new(title);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button
                    class=button_class.get_value()
                    title=title.get_value()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
