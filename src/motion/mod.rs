//! Motion
//!
//! Spring physics and the animation state driven by scroll position.

pub mod reveal;
pub mod scroll;
pub mod spring;

pub use reveal::{Pose, Reveal, RevealPhase, REVEAL_THRESHOLD};
pub use scroll::SmoothedProgress;
pub use spring::{Interpolator, Spring, SpringValue};
