//! Card Feed
//!
//! All cards in list order, or the empty-state message when there are none.

use leptos::prelude::*;

use crate::components::AnimatedCard;
use crate::editor;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardFeed() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="card-feed">
            <For
                each=move || store.cards().get()
                key=|card| card.id.clone()
                children=move |card| view! { <AnimatedCard card_id=card.id /> }
            />
            {move || {
                store
                    .cards()
                    .with(|cards| editor::empty_state_message(cards))
                    .map(|message| view! {
                        <div class="empty-state">
                            <p>{message}</p>
                        </div>
                    })
            }}
        </div>
    }
}
