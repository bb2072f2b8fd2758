//! Layer Editor Component
//!
//! Per-card controls inside the editor panel. Every input writes straight
//! through `store_update_card`.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::editor::opacity_label;
use crate::models::{AnimationKind, Card, CardKind, CardPatch, TextColor};
use crate::store::{store_remove_card, store_update_card, use_app_store, AppStateStoreFields};

/// Card kind options
const CARD_KINDS: &[(&str, &str)] = &[
    ("text", "Text Card"),
    ("image", "Image Card"),
];

/// Animation options
const ANIMATIONS: &[(&str, &str)] = &[
    ("left", "Float Left"),
    ("right", "Float Right"),
    ("center", "Center Scale"),
];

/// Text color swatches
const TEXT_COLORS: &[(TextColor, &str)] = &[
    (TextColor::Black, "swatch swatch-black"),
    (TextColor::White, "swatch swatch-white"),
];

#[component]
pub fn LayerEditor(card_id: String) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(card_id);

    let card = Memo::new(move |_| {
        id.with_value(|id| store.cards().with(|cards| cards.iter().find(|c| &c.id == id).cloned()))
    });
    let read = move |get: fn(&Card) -> String| card.with(|card| card.as_ref().map(get).unwrap_or_default());
    let update = move |patch: CardPatch| id.with_value(|id| store_update_card(&store, id, patch));

    // 1-based position in the list
    let position = move || {
        id.with_value(|id| store.cards().with(|cards| cards.iter().position(|c| &c.id == id)))
            .map(|index| index + 1)
            .unwrap_or(0)
    };
    let is_image = move || card.with(|card| card.as_ref().map(|c| c.kind == CardKind::Image).unwrap_or(false));
    let opacity = move || card.with(|card| card.as_ref().map(|c| c.opacity).unwrap_or(0.0));
    let text_color = move || card.with(|card| card.as_ref().map(|c| c.text_color));

    view! {
        <div class="layer-editor">
            <div class="layer-header">
                <span class="layer-label">{move || format!("LAYER #{}", position())}</span>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    title="Delete layer"
                    on_confirm=move |_: ()| id.with_value(|id| store_remove_card(&store, id))
                />
            </div>

            <div class="layer-grid">
                <select
                    class="layer-select"
                    on:change=move |ev| update(CardPatch::kind(CardKind::from_str(&event_target_value(&ev))))
                >
                    {CARD_KINDS.iter().map(|(value, label)| {
                        let value = *value;
                        view! {
                            <option
                                value=value
                                prop:selected=move || read(|c| c.kind.as_str().to_string()) == value
                            >
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <select
                    class="layer-select"
                    on:change=move |ev| update(CardPatch::animation(AnimationKind::from_str(&event_target_value(&ev))))
                >
                    {ANIMATIONS.iter().map(|(value, label)| {
                        let value = *value;
                        view! {
                            <option
                                value=value
                                prop:selected=move || read(|c| c.animation.as_str().to_string()) == value
                            >
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <input
                type="text"
                class="layer-input"
                placeholder="Title"
                prop:value=move || read(|c| c.title.clone().unwrap_or_default())
                on:input=move |ev| update(CardPatch::title(event_target_value(&ev)))
            />

            <Show when=is_image>
                <input
                    type="text"
                    class="layer-input"
                    placeholder="Image URL"
                    prop:value=move || read(|c| c.image_url.clone().unwrap_or_default())
                    on:input=move |ev| update(CardPatch::image_url(event_target_value(&ev)))
                />
            </Show>

            <textarea
                class="layer-input"
                placeholder="Content"
                rows="2"
                prop:value=move || read(|c| c.body.clone().unwrap_or_default())
                on:input=move |ev| update(CardPatch::body(event_target_value(&ev)))
            ></textarea>

            <div class="layer-grid">
                <div class="layer-field">
                    <label class="field-label">"Color"</label>
                    <input
                        type="color"
                        class="color-input"
                        prop:value=move || read(|c| c.background_color.clone())
                        on:input=move |ev| update(CardPatch::background_color(event_target_value(&ev)))
                    />
                </div>
                <div class="layer-field">
                    <label class="field-label">{move || opacity_label(opacity())}</label>
                    <input
                        type="range"
                        min="0"
                        max="1"
                        step="0.05"
                        class="range-input"
                        prop:value=move || opacity().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                update(CardPatch::opacity(value));
                            }
                        }
                    />
                </div>
            </div>

            <div class="text-color-row">
                <label class="field-label">"Text Color:"</label>
                {TEXT_COLORS.iter().map(|&(color, class)| {
                    view! {
                        <button
                            class=move || {
                                if text_color() == Some(color) {
                                    format!("{} active", class)
                                } else {
                                    class.to_string()
                                }
                            }
                            title=format!("{:?}", color)
                            on:click=move |_| update(CardPatch::text_color(color))
                        ></button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
