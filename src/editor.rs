//! Editor Operations
//!
//! The mutations the editor panel performs on the card list and the
//! background config. Every operation is total: unknown ids are no-ops.

use std::collections::HashSet;

use crate::defaults;
use crate::ids::IdGenerator;
use crate::models::{AppConfig, Card, CardPatch, ConfigPatch, Snapshot};

/// Shown in the feed when there are no cards
pub const EMPTY_STATE_MESSAGE: &str = "No cards yet. Click the settings icon to add one!";

/// Suggested name for the export file
pub const EXPORT_FILE_NAME: &str = "site_config.json";

/// Editor panel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Collapsed,
    Expanded,
}

impl Panel {
    pub fn open(&mut self) {
        *self = Panel::Expanded;
    }

    pub fn close(&mut self) {
        *self = Panel::Collapsed;
    }

    pub fn is_expanded(&self) -> bool {
        *self == Panel::Expanded
    }
}

pub fn card_ids(cards: &[Card]) -> HashSet<String> {
    cards.iter().map(|card| card.id.clone()).collect()
}

/// Append a default card with a fresh id; returns the id
pub fn add_card(cards: &mut Vec<Card>, ids: &mut IdGenerator) -> String {
    let id = ids.fresh(&card_ids(cards));
    cards.push(defaults::new_card(id.clone()));
    id
}

/// Apply `patch` to the card with `id`. Returns whether a card matched.
pub fn update_card(cards: &mut [Card], id: &str, patch: CardPatch) -> bool {
    match cards.iter_mut().find(|card| card.id == id) {
        Some(card) => {
            patch.apply_to(card);
            true
        }
        None => false,
    }
}

/// Remove the card with `id`, keeping the order of the rest.
/// Returns whether a card was removed.
pub fn remove_card(cards: &mut Vec<Card>, id: &str) -> bool {
    let before = cards.len();
    cards.retain(|card| card.id != id);
    cards.len() != before
}

pub fn update_config(config: &mut AppConfig, patch: ConfigPatch) {
    patch.apply_to(config);
}

/// Pretty JSON of `{ config, cards }`
pub fn export_snapshot(config: &AppConfig, cards: &[Card]) -> Result<String, serde_json::Error> {
    Snapshot {
        config: config.clone(),
        cards: cards.to_vec(),
    }
    .to_json()
}

/// Give every card whose id repeats an earlier card's id a fresh one.
/// Returns how many ids were replaced.
pub fn dedupe_ids(cards: &mut [Card], ids: &mut IdGenerator) -> usize {
    let mut seen: HashSet<String> = HashSet::new();
    let mut all = card_ids(cards);
    let mut replaced = 0;
    for card in cards.iter_mut() {
        if !seen.insert(card.id.clone()) {
            let id = ids.fresh(&all);
            all.insert(id.clone());
            seen.insert(id.clone());
            card.id = id;
            replaced += 1;
        }
    }
    replaced
}

pub fn empty_state_message(cards: &[Card]) -> Option<&'static str> {
    cards.is_empty().then_some(EMPTY_STATE_MESSAGE)
}

/// Slider caption, e.g. `Opacity: 30%`
pub fn opacity_label(opacity: f64) -> String {
    format!("Opacity: {}%", (opacity * 100.0).round() as i64)
}
