//! Initial Session Data
//!
//! Demo background and cards the page starts with, and the shape of a
//! freshly added card.

use crate::models::{AnimationKind, AppConfig, BackgroundMode, Card, CardKind, TextColor};

pub const INITIAL_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1497215728101-856f4ea42174?q=80&w=2070&auto=format&fit=crop";

pub const NEW_CARD_TITLE: &str = "New Content Layer";
pub const NEW_CARD_BODY: &str = "Edit this content in the editor panel.";
pub const NEW_CARD_COLOR: &str = "#ffffff";
pub const NEW_CARD_OPACITY: f64 = 0.5;

pub fn initial_config() -> AppConfig {
    AppConfig {
        background_mode: BackgroundMode::Image,
        background_value: INITIAL_BACKGROUND_URL.to_string(),
    }
}

/// Card appended by the editor's add action
pub fn new_card(id: String) -> Card {
    Card {
        id,
        kind: CardKind::Text,
        title: Some(NEW_CARD_TITLE.to_string()),
        body: Some(NEW_CARD_BODY.to_string()),
        image_url: None,
        animation: AnimationKind::FromCenter,
        background_color: NEW_CARD_COLOR.to_string(),
        opacity: NEW_CARD_OPACITY,
        text_color: TextColor::Black,
    }
}

fn demo_card(
    id: &str,
    kind: CardKind,
    title: &str,
    body: &str,
    image_url: Option<&str>,
    animation: AnimationKind,
    background_color: &str,
    opacity: f64,
) -> Card {
    Card {
        id: id.to_string(),
        kind,
        title: Some(title.to_string()),
        body: Some(body.to_string()),
        image_url: image_url.map(str::to_string),
        animation,
        background_color: background_color.to_string(),
        opacity,
        text_color: TextColor::White,
    }
}

pub fn initial_cards() -> Vec<Card> {
    vec![
        demo_card(
            "1",
            CardKind::Text,
            "Welcome to Dynamic Design",
            "This website is built with layered, animated components. Scroll down to see the magic. You can customize every aspect using the settings icon in the bottom right.",
            None,
            AnimationKind::FromCenter,
            "#ffffff",
            0.3,
        ),
        demo_card(
            "2",
            CardKind::Image,
            "Visual Excellence",
            "Insert high-quality images to create a stunning visual experience. This card slides in from the left.",
            Some("https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2072&auto=format&fit=crop"),
            AnimationKind::FromLeft,
            "#1e293b",
            0.6,
        ),
        demo_card(
            "3",
            CardKind::Text,
            "Customizable Layers",
            "Change background colors, transparency levels, and animation directions in real-time. Each layer feels distinct and premium.",
            None,
            AnimationKind::FromRight,
            "#6366f1",
            0.4,
        ),
        demo_card(
            "4",
            CardKind::Image,
            "Geometric Animations",
            "Cards can scale from their geometric center or slide from the sides to create a dynamic flow as the user scrolls.",
            Some("https://images.unsplash.com/photo-1478760329108-5c3ed9d495a0?q=80&w=1974&auto=format&fit=crop"),
            AnimationKind::FromCenter,
            "#ffffff",
            0.2,
        ),
    ]
}
