//! Animated Card Component
//!
//! Draws one card and springs it in and out as it crosses the visibility
//! threshold.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_viewport::{observe_intersection, FrameLoop, IntersectionWatch};

use crate::motion::{Reveal, REVEAL_THRESHOLD};
use crate::render::{render_card, CardContent, CardVisual, ImageSlot};
use crate::store::{use_app_store, AppStateStoreFields};

fn card_content(visual: CardVisual) -> AnyView {
    match visual.content {
        CardContent::Text { body } => view! {
            <div class="card-text">
                <h2 class="card-title">{visual.title}</h2>
                <p class="card-body">{body}</p>
            </div>
        }
        .into_any(),
        CardContent::Image { slot, body } => view! {
            <div class="card-image-layout">
                <h2 class="card-title">{visual.title}</h2>
                <div class="card-image-slot">
                    {match slot {
                        ImageSlot::Image { url, alt } => view! {
                            <img src=url alt=alt class="card-image" />
                        }
                        .into_any(),
                        ImageSlot::Placeholder(text) => view! {
                            <div class="card-image-placeholder">{text}</div>
                        }
                        .into_any(),
                    }}
                </div>
                {body.map(|body| view! { <p class="card-body">{body}</p> })}
            </div>
        }
        .into_any(),
    }
}

/// One card in the feed, looked up by ID
#[component]
pub fn AnimatedCard(card_id: String) -> impl IntoView {
    let store = use_app_store();

    let card = Memo::new(move |_| {
        store
            .cards()
            .with(|cards| cards.iter().find(|c| c.id == card_id).cloned())
    });
    let visual = Memo::new(move |_| card.with(|card| card.as_ref().map(render_card)));

    let animation = card.with_untracked(|card| card.as_ref().map(|c| c.animation).unwrap_or_default());
    let reveal = StoredValue::new(Reveal::new(animation));
    let (pose, set_pose) = signal(reveal.with_value(|r| r.pose()));

    let frames = StoredValue::new_local(FrameLoop::new(move |dt| {
        reveal
            .try_update_value(|r| {
                let moving = r.tick(dt);
                set_pose.set(r.pose());
                moving
            })
            .unwrap_or(false)
    }));
    let watch = StoredValue::new_local(None::<IntersectionWatch>);

    // Start observing once the element is mounted
    let node_ref = NodeRef::<Div>::new();
    Effect::new(move |_| {
        let Some(element) = node_ref.get() else { return };
        if watch.with_value(Option::is_some) {
            return;
        }
        let observed = observe_intersection(&element, REVEAL_THRESHOLD, move |ratio| {
            if reveal.try_update_value(|r| r.observe(ratio)).unwrap_or(false) {
                frames.try_with_value(FrameLoop::start);
            }
        });
        match observed {
            Ok(handle) => watch.set_value(Some(handle)),
            Err(e) => log::warn!("[REVEAL] {}", e),
        }
    });

    // Follow animation changes made in the editor
    Effect::new(move |_| {
        let Some(kind) = card.with(|card| card.as_ref().map(|c| c.animation)) else { return };
        if reveal.try_update_value(|r| r.set_animation(kind)).unwrap_or(false) {
            frames.with_value(FrameLoop::start);
        } else {
            reveal.with_value(|r| set_pose.set(r.pose()));
        }
    });

    on_cleanup(move || {
        if let Some(Some(handle)) = watch.try_update_value(Option::take) {
            handle.disconnect();
        }
        frames.try_with_value(FrameLoop::stop);
    });

    let style = move || {
        let fill = visual.with(|v| v.as_ref().map(CardVisual::container_style).unwrap_or_default());
        format!("{} {}", fill, pose.get().style())
    };

    view! {
        <div node_ref=node_ref class="animated-card" style=style>
            {move || visual.get().map(card_content)}
        </div>
    }
}
