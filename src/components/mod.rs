//! UI Components
//!
//! Leptos components for the page and the editor panel.

mod activity_log;
mod animated_card;
mod background;
mod card_feed;
mod choice_buttons;
mod delete_confirm_button;
mod editor_panel;
mod layer_editor;
mod scroll_progress;

pub use activity_log::ActivityLog;
pub use animated_card::AnimatedCard;
pub use background::Background;
pub use card_feed::CardFeed;
pub use choice_buttons::{ChoiceButtons, BACKGROUND_MODES};
pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_panel::EditorPanel;
pub use layer_editor::LayerEditor;
pub use scroll_progress::ScrollProgressBar;
