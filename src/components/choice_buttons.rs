//! Choice Buttons Component
//!
//! Row of toggle buttons where exactly one option is active.

use leptos::prelude::*;

/// Background mode options
pub const BACKGROUND_MODES: &[(&str, &str)] = &[
    ("color", "Color"),
    ("image", "Image"),
];

/// One button per `(value, label)` option; the current value is highlighted
#[component]
pub fn ChoiceButtons(
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] current: Signal<String>,
    on_change: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="choice-buttons">
            {options.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || current.get() == val;
                view! {
                    <button
                        class=move || if is_selected() { "choice-btn active" } else { "choice-btn" }
                        on:click=move |_| on_change(val_clone.clone())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
