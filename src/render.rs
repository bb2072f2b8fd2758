//! Card Rendering
//!
//! Pure mapping from a card to what the card view draws. Missing text falls
//! back to placeholder strings; nothing renders blank.

use crate::models::{Card, CardKind};

pub const UNTITLED_TEXT_CARD: &str = "Untitled Card";
pub const UNTITLED_IMAGE_CARD: &str = "Untitled Image Card";
pub const NO_CONTENT: &str = "No content provided.";
pub const NO_IMAGE: &str = "No image URL provided";

/// Blur applied behind the translucent card fill
pub const CARD_BACKDROP_BLUR_PX: u32 = 12;

/// What goes in the 16:9 image slot
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot {
    Image { url: String, alt: String },
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardContent {
    Text { body: String },
    /// Body is only shown for image cards when present
    Image { slot: ImageSlot, body: Option<String> },
}

/// Everything the card view needs, derived from one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardVisual {
    /// Base color with the opacity folded into an alpha byte
    pub fill: String,
    pub backdrop_blur_px: u32,
    pub text_color: &'static str,
    pub title: String,
    pub content: CardContent,
}

impl CardVisual {
    /// Inline style for the card container (transform excluded)
    pub fn container_style(&self) -> String {
        format!(
            "background-color: {fill}; backdrop-filter: blur({blur}px); -webkit-backdrop-filter: blur({blur}px); color: {color};",
            fill = self.fill,
            blur = self.backdrop_blur_px,
            color = self.text_color,
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Alpha byte for an opacity: `floor(clamp(opacity, 0, 1) * 255)`
pub fn alpha_byte(opacity: f64) -> u8 {
    if opacity.is_nan() {
        return 0;
    }
    (opacity.clamp(0.0, 1.0) * 255.0).floor() as u8
}

/// `#rrggbb` + two hex alpha digits. Short `#rgb` is expanded first;
/// anything else gets the suffix as-is.
pub fn translucent_fill(color: &str, opacity: f64) -> String {
    let alpha = alpha_byte(opacity);
    let base = match color.strip_prefix('#') {
        Some(short) if short.len() == 3 && short.chars().all(|c| c.is_ascii_hexdigit()) => {
            let mut expanded = String::from("#");
            for c in short.chars() {
                expanded.push(c);
                expanded.push(c);
            }
            expanded
        }
        _ => color.to_string(),
    };
    format!("{}{:02x}", base, alpha)
}

pub fn render_card(card: &Card) -> CardVisual {
    let body = non_empty(&card.body).map(str::to_string);
    let (title, content) = match card.kind {
        CardKind::Text => (
            non_empty(&card.title).unwrap_or(UNTITLED_TEXT_CARD).to_string(),
            CardContent::Text {
                body: body.unwrap_or_else(|| NO_CONTENT.to_string()),
            },
        ),
        CardKind::Image => {
            let slot = match non_empty(&card.image_url) {
                Some(url) => ImageSlot::Image {
                    url: url.to_string(),
                    alt: card.title.clone().unwrap_or_default(),
                },
                None => ImageSlot::Placeholder(NO_IMAGE),
            };
            (
                non_empty(&card.title).unwrap_or(UNTITLED_IMAGE_CARD).to_string(),
                CardContent::Image { slot, body },
            )
        }
    };

    CardVisual {
        fill: translucent_fill(&card.background_color, card.opacity),
        backdrop_blur_px: CARD_BACKDROP_BLUR_PX,
        text_color: card.text_color.css(),
        title,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::new_card;
    use crate::models::{CardPatch, TextColor};

    fn card_with(patch: CardPatch) -> Card {
        let mut card = new_card("t".to_string());
        patch.apply_to(&mut card);
        card
    }

    #[test]
    fn test_alpha_uses_floor() {
        // 0.3 * 255 = 76.49..., floor gives 76 = 0x4c
        assert_eq!(alpha_byte(0.3), 76);
        assert_eq!(translucent_fill("#ffffff", 0.3), "#ffffff4c");
        assert_eq!(translucent_fill("#1e293b", 0.6), "#1e293b99");
        assert_eq!(translucent_fill("#000000", 1.0), "#000000ff");
        assert_eq!(translucent_fill("#000000", 0.0), "#00000000");
    }

    #[test]
    fn test_alpha_clamps_out_of_range() {
        assert_eq!(alpha_byte(1.7), 255);
        assert_eq!(alpha_byte(-0.2), 0);
        assert_eq!(alpha_byte(f64::NAN), 0);
    }

    #[test]
    fn test_short_hex_is_expanded() {
        assert_eq!(translucent_fill("#fa0", 0.5), "#ffaa007f");
        // Not a color at all: passed through, degrades in the browser
        assert_eq!(translucent_fill("tomato", 0.5), "tomato7f");
    }

    #[test]
    fn test_text_card_placeholders() {
        let mut card = new_card("t".to_string());
        card.title = None;
        card.body = Some(String::new());

        let visual = render_card(&card);
        assert_eq!(visual.title, UNTITLED_TEXT_CARD);
        assert_eq!(visual.content, CardContent::Text { body: NO_CONTENT.to_string() });
    }

    #[test]
    fn test_image_card_without_url() {
        let mut card = card_with(CardPatch::kind(CardKind::Image));
        card.title = Some(String::new());
        card.body = None;

        let visual = render_card(&card);
        assert_eq!(visual.title, UNTITLED_IMAGE_CARD);
        assert_eq!(
            visual.content,
            CardContent::Image { slot: ImageSlot::Placeholder(NO_IMAGE), body: None }
        );
    }

    #[test]
    fn test_image_card_with_url_and_body() {
        let mut card = card_with(CardPatch::kind(CardKind::Image));
        CardPatch::image_url("https://example.com/a.png").apply_to(&mut card);
        CardPatch::title("Pic").apply_to(&mut card);

        let visual = render_card(&card);
        assert_eq!(visual.title, "Pic");
        match visual.content {
            CardContent::Image { slot: ImageSlot::Image { url, alt }, body } => {
                assert_eq!(url, "https://example.com/a.png");
                assert_eq!(alt, "Pic");
                assert_eq!(body.as_deref(), Some(crate::defaults::NEW_CARD_BODY));
            }
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_text_color_and_style() {
        let card = card_with(CardPatch::text_color(TextColor::White));
        let visual = render_card(&card);
        assert_eq!(visual.text_color, "#fff");

        let style = visual.container_style();
        assert!(style.contains("background-color: #ffffff7f;"));
        assert!(style.contains("backdrop-filter: blur(12px);"));
        assert!(style.contains("color: #fff;"));
    }
}
