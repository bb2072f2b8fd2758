//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the helpers
//! in this module mutate cards or config.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::defaults;
use crate::editor::{self, Panel};
use crate::ids::IdGenerator;
use crate::models::{AppConfig, Card, CardPatch, ConfigPatch, Snapshot};

/// Page builder session state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Page background
    pub config: AppConfig,
    /// Cards in render order
    pub cards: Vec<Card>,
    /// Editor panel visibility (not exported)
    pub panel: Panel,
    /// Source of fresh card ids
    pub ids: IdGenerator,
}

impl AppState {
    /// Demo config and cards, clock-seeded ids
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::from_clock())
    }

    pub fn with_ids(ids: IdGenerator) -> Self {
        Self {
            config: defaults::initial_config(),
            cards: defaults::initial_cards(),
            panel: Panel::Collapsed,
            ids,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            cards: self.cards.clone(),
        }
    }

    pub fn export_snapshot(&self) -> Result<String, serde_json::Error> {
        editor::export_snapshot(&self.config, &self.cards)
    }

    /// Replace config and cards, re-issuing ids that collide within the list
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        self.config = snapshot.config;
        self.cards = snapshot.cards;
        editor::dedupe_ids(&mut self.cards, &mut self.ids);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a default card; returns its id
pub fn store_add_card(store: &AppStore) -> String {
    let mut ids = store.ids().get_untracked();
    let id = editor::add_card(&mut store.cards().write(), &mut ids);
    *store.ids().write() = ids;
    log::debug!("[STORE] Added card {}", id);
    id
}

/// Update named fields of a card by ID
pub fn store_update_card(store: &AppStore, id: &str, patch: CardPatch) {
    if editor::update_card(&mut store.cards().write(), id, patch) {
        log::debug!("[STORE] Updated card {}", id);
    } else {
        log::debug!("[STORE] Update ignored, no card {}", id);
    }
}

/// Remove a card from the store by ID
pub fn store_remove_card(store: &AppStore, id: &str) {
    if editor::remove_card(&mut store.cards().write(), id) {
        log::debug!("[STORE] Removed card {}", id);
    } else {
        log::debug!("[STORE] Remove ignored, no card {}", id);
    }
}

pub fn store_update_config(store: &AppStore, patch: ConfigPatch) {
    editor::update_config(&mut store.config().write(), patch);
    log::debug!("[STORE] Config updated");
}

/// Serialize the current config and cards without tracking
pub fn store_export_snapshot(store: &AppStore) -> Result<String, serde_json::Error> {
    store.with_untracked(|state| state.export_snapshot())
}

pub fn store_open_panel(store: &AppStore) {
    store.panel().write().open();
    log::debug!("[STORE] Panel opened");
}

pub fn store_close_panel(store: &AppStore) {
    store.panel().write().close();
    log::debug!("[STORE] Panel closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    use leptos::reactive::owner::Owner;
    use log::LevelFilter;
    use ring_logger::RingLogger;

    use crate::defaults::{NEW_CARD_BODY, NEW_CARD_TITLE};
    use crate::models::{AnimationKind, BackgroundMode, CardKind, TextColor};

    const FIXTURE_IDS: [&str; 4] = ["1", "2", "3", "4"];

    /// Run `test` against a fresh demo store inside a reactive owner
    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(AppState::with_ids(IdGenerator::new(2024)))));
    }

    fn cards(store: &AppStore) -> Vec<Card> {
        store.cards().get_untracked()
    }

    /// Process-wide logger shared by the tests that check log output
    fn test_logger() -> &'static RingLogger {
        static LOGGER: OnceLock<&'static RingLogger> = OnceLock::new();
        LOGGER.get_or_init(|| ring_logger::init(LevelFilter::Debug, 4096).expect("logger installed once"))
    }

    fn logged(logger: &RingLogger, needle: &str) -> bool {
        logger.recent().iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_update_touches_only_the_target_card() {
        let patches: [(fn() -> CardPatch, fn(&Card, &Card) -> Card); 3] = [
            (
                || CardPatch::title("Renamed"),
                |after, before| Card { title: before.title.clone(), ..after.clone() },
            ),
            (
                || CardPatch::opacity(0.85),
                |after, before| Card { opacity: before.opacity, ..after.clone() },
            ),
            (
                || CardPatch::text_color(TextColor::Black),
                |after, before| Card { text_color: before.text_color, ..after.clone() },
            ),
        ];

        for target in FIXTURE_IDS {
            for (patch, restore) in patches {
                with_store(|store| {
                    let before = cards(&store);
                    store_update_card(&store, target, patch());
                    let after = cards(&store);

                    assert_eq!(after.len(), before.len());
                    for (after, before) in after.iter().zip(&before) {
                        if after.id == target {
                            assert_eq!(&restore(after, before), before);
                        } else {
                            assert_eq!(after, before);
                        }
                    }
                });
            }
        }
    }

    #[test]
    fn test_update_logs_both_outcomes() {
        let logger = test_logger();
        with_store(|store| {
            store_update_card(&store, "3", CardPatch::title("Logged"));
            store_update_card(&store, "missing-card", CardPatch::title("Nope"));
        });
        assert!(logged(logger, "[STORE] Updated card 3"));
        assert!(logged(logger, "[STORE] Update ignored, no card missing-card"));
    }

    #[test]
    fn test_update_applies_each_field() {
        with_store(|store| {
            store_update_card(&store, "2", CardPatch::title("Renamed"));
            store_update_card(&store, "2", CardPatch::opacity(0.85));
            store_update_card(&store, "2", CardPatch::kind(CardKind::Text));
            let card = cards(&store).into_iter().find(|c| c.id == "2").unwrap();
            assert_eq!(card.title.as_deref(), Some("Renamed"));
            assert_eq!(card.opacity, 0.85);
            assert_eq!(card.kind, CardKind::Text);
        });
    }

    #[test]
    fn test_add_then_export() {
        with_store(|store| {
            let previous: Vec<String> = cards(&store).iter().map(|c| c.id.clone()).collect();

            let id = store_add_card(&store);
            let snapshot = Snapshot::from_json(&store_export_snapshot(&store).unwrap()).unwrap();

            assert_eq!(snapshot.cards.len(), previous.len() + 1);
            let last = snapshot.cards.last().unwrap();
            assert_eq!(last.id, id);
            assert!(!previous.contains(&last.id));
            assert_eq!(last.kind, CardKind::Text);
            assert_eq!(last.animation, AnimationKind::FromCenter);
            assert_eq!(last.opacity, 0.5);
            assert_eq!(last.text_color, TextColor::Black);
            assert_eq!(last.title.as_deref(), Some(NEW_CARD_TITLE));
            assert_eq!(last.body.as_deref(), Some(NEW_CARD_BODY));
            assert_eq!(last.background_color, "#ffffff");
        });
    }

    #[test]
    fn test_repeated_adds_get_distinct_ids() {
        with_store(|store| {
            let first = store_add_card(&store);
            let second = store_add_card(&store);
            assert_ne!(first, second);
            assert_eq!(editor::card_ids(&cards(&store)).len(), 6);
        });
    }

    #[test]
    fn test_remove_unknown_id_leaves_list_identical() {
        with_store(|store| {
            let before = cards(&store);
            store_remove_card(&store, "does-not-exist");
            assert_eq!(cards(&store), before);
        });
    }

    #[test]
    fn test_export_round_trip() {
        with_store(|store| {
            store_add_card(&store);
            store_update_config(&store, ConfigPatch::mode(BackgroundMode::Color));
            store_update_config(&store, ConfigPatch::value("#112233"));
            store_update_card(&store, "2", CardPatch::opacity(0.85));
            store_update_card(&store, "4", CardPatch::body(""));

            let json = store_export_snapshot(&store).unwrap();
            let expected = store.with_untracked(|state| state.snapshot());
            assert_eq!(expected.config.background_value, "#112233");
            assert_eq!(Snapshot::from_json(&json).unwrap(), expected);

            let mut reloaded = AppState::with_ids(IdGenerator::new(1));
            reloaded.load_snapshot(Snapshot::from_json(&json).unwrap());
            assert_eq!(reloaded.snapshot(), expected);
        });
    }

    #[test]
    fn test_export_is_pretty_and_uses_literal_enum_values() {
        with_store(|store| {
            let json = store_export_snapshot(&store).unwrap();
            assert!(json.starts_with("{\n  \"config\": {"));
            assert!(json.contains("\"backgroundMode\": \"image\""));
            assert!(json.contains("\"animation\": \"left\""));
            assert!(json.contains("\"textColor\": \"white\""));
            assert!(json.contains("\"kind\": \"image\""));
        });
    }

    #[test]
    fn test_load_snapshot_regenerates_colliding_ids() {
        let mut state = AppState::with_ids(IdGenerator::new(2024));
        let mut snapshot = state.snapshot();
        snapshot.cards[1].id = "1".to_string();

        state.load_snapshot(snapshot);

        let ids = editor::card_ids(&state.cards);
        assert_eq!(ids.len(), 4);
        assert_eq!(state.cards[0].id, "1");
        assert_ne!(state.cards[1].id, "1");
    }

    #[test]
    fn test_removing_every_card_shows_empty_state() {
        with_store(|store| {
            for id in FIXTURE_IDS {
                store_remove_card(&store, id);
            }
            let remaining = cards(&store);
            assert!(remaining.is_empty());
            assert_eq!(
                editor::empty_state_message(&remaining),
                Some(editor::EMPTY_STATE_MESSAGE)
            );
        });
    }

    #[test]
    fn test_panel_toggle_keeps_data() {
        with_store(|store| {
            assert_eq!(store.panel().get_untracked(), Panel::Collapsed);
            let before = store.with_untracked(|state| state.snapshot());

            store_open_panel(&store);
            store_close_panel(&store);
            store_open_panel(&store);

            assert_eq!(store.panel().get_untracked(), Panel::Expanded);
            assert_eq!(store.with_untracked(|state| state.snapshot()), before);
        });
    }
}
