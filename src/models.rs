//! Frontend Models
//!
//! Card and background data, plus the exported snapshot shape.

use serde::{Deserialize, Serialize};

/// Card layout kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Title and body only
    #[default]
    Text,
    /// Title, 16:9 image slot, optional body
    Image,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Text => "text",
            CardKind::Image => "image",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "image" => CardKind::Image,
            _ => CardKind::Text,
        }
    }
}

/// Direction a card enters from when revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AnimationKind {
    #[serde(rename = "left")]
    FromLeft,
    #[serde(rename = "right")]
    FromRight,
    #[default]
    #[serde(rename = "center")]
    FromCenter,
}

impl AnimationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::FromLeft => "left",
            AnimationKind::FromRight => "right",
            AnimationKind::FromCenter => "center",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "left" => AnimationKind::FromLeft,
            "right" => AnimationKind::FromRight,
            _ => AnimationKind::FromCenter,
        }
    }
}

/// Foreground text color of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Black,
    White,
}

impl TextColor {
    /// Literal CSS color value
    pub fn css(&self) -> &'static str {
        match self {
            TextColor::Black => "#000",
            TextColor::White => "#fff",
        }
    }
}

/// One content layer in the scroll feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Session-unique identifier
    pub id: String,
    pub kind: CardKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Only meaningful for image cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub animation: AnimationKind,
    /// Hex RGB, e.g. `#1e293b`
    pub background_color: String,
    /// Fill opacity in [0, 1]
    pub opacity: f64,
    pub text_color: TextColor,
}

/// Field-wise update for a card; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    pub kind: Option<CardKind>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub animation: Option<AnimationKind>,
    pub background_color: Option<String>,
    pub opacity: Option<f64>,
    pub text_color: Option<TextColor>,
}

impl CardPatch {
    pub fn kind(kind: CardKind) -> Self {
        Self { kind: Some(kind), ..Default::default() }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Default::default() }
    }

    pub fn body(body: impl Into<String>) -> Self {
        Self { body: Some(body.into()), ..Default::default() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self { image_url: Some(url.into()), ..Default::default() }
    }

    pub fn animation(animation: AnimationKind) -> Self {
        Self { animation: Some(animation), ..Default::default() }
    }

    pub fn background_color(color: impl Into<String>) -> Self {
        Self { background_color: Some(color.into()), ..Default::default() }
    }

    pub fn opacity(opacity: f64) -> Self {
        Self { opacity: Some(opacity), ..Default::default() }
    }

    pub fn text_color(color: TextColor) -> Self {
        Self { text_color: Some(color), ..Default::default() }
    }

    /// Overwrite the named fields on `card`. The id is never touched.
    pub fn apply_to(self, card: &mut Card) {
        if let Some(kind) = self.kind {
            card.kind = kind;
        }
        if let Some(title) = self.title {
            card.title = Some(title);
        }
        if let Some(body) = self.body {
            card.body = Some(body);
        }
        if let Some(url) = self.image_url {
            card.image_url = Some(url);
        }
        if let Some(animation) = self.animation {
            card.animation = animation;
        }
        if let Some(color) = self.background_color {
            card.background_color = color;
        }
        if let Some(opacity) = self.opacity {
            card.opacity = opacity;
        }
        if let Some(color) = self.text_color {
            card.text_color = color;
        }
    }
}

/// How `AppConfig::background_value` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    #[default]
    Color,
    Image,
}

impl BackgroundMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::Color => "color",
            BackgroundMode::Image => "image",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "image" => BackgroundMode::Image,
            _ => BackgroundMode::Color,
        }
    }

    /// Placeholder for the background value input
    pub fn placeholder(&self) -> &'static str {
        match self {
            BackgroundMode::Color => "#HEX Color",
            BackgroundMode::Image => "Image URL",
        }
    }
}

/// Global page background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub background_mode: BackgroundMode,
    /// Hex color in color mode, image URL in image mode. Never validated.
    pub background_value: String,
}

impl AppConfig {
    /// Inline style for the fixed background layer
    pub fn background_style(&self) -> String {
        match self.background_mode {
            BackgroundMode::Color => format!("background-color: {};", self.background_value),
            BackgroundMode::Image => format!(
                "background-image: url({}); background-size: cover; background-position: center;",
                self.background_value
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    pub background_mode: Option<BackgroundMode>,
    pub background_value: Option<String>,
}

impl ConfigPatch {
    pub fn mode(mode: BackgroundMode) -> Self {
        Self { background_mode: Some(mode), ..Default::default() }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self { background_value: Some(value.into()), ..Default::default() }
    }

    pub fn apply_to(self, config: &mut AppConfig) {
        if let Some(mode) = self.background_mode {
            config.background_mode = mode;
        }
        if let Some(value) = self.background_value {
            config.background_value = value;
        }
    }
}

/// Exported `{ config, cards }` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: AppConfig,
    pub cards: Vec<Card>,
}

impl Snapshot {
    /// Pretty-printed JSON, as written to the export file
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
