//! Card Reveal State Machine
//!
//! Each card starts hidden at its animation's initial pose. Crossing the
//! visibility threshold on the way in springs it to the revealed pose;
//! dropping back below springs it back. The reveal replays on every
//! re-entry, and a reversal mid-flight continues from the current pose.
//!
//! ```text
//!   Hidden --enter--> Revealing --settle--> Revealed
//!     ^                 |    ^                 |
//!     |               leave enter            leave
//!     |                 v    |                 |
//!     +----settle---- Hiding <-----------------+
//! ```

use crate::models::AnimationKind;
use crate::motion::spring::{Interpolator, Spring, SpringValue};

/// Visible fraction of a card at which it counts as in view
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Horizontal start offset for sliding cards, in CSS pixels
pub const SLIDE_OFFSET: f64 = 150.0;

/// Start scale for center-scaling cards
pub const CENTER_START_SCALE: f64 = 0.5;

/// Critically damped; within 1% of the target after about 0.66 s
pub const CARD_SPRING: Spring = Spring::new(100.0, 20.0).with_rest(0.001, 0.01);

/// Visual state of a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal offset in CSS pixels
    pub x: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Pose {
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({:.2}px) scale({:.4}); opacity: {:.4};",
            self.x, self.scale, self.opacity
        )
    }
}

impl AnimationKind {
    /// Pose before the card is revealed
    pub fn initial_pose(&self) -> Pose {
        match self {
            AnimationKind::FromLeft => Pose { x: -SLIDE_OFFSET, scale: 1.0, opacity: 0.0 },
            AnimationKind::FromRight => Pose { x: SLIDE_OFFSET, scale: 1.0, opacity: 0.0 },
            AnimationKind::FromCenter => Pose { x: 0.0, scale: CENTER_START_SCALE, opacity: 0.0 },
        }
    }

    /// Settled pose while in view
    pub fn revealed_pose(&self) -> Pose {
        Pose { x: 0.0, scale: 1.0, opacity: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealing,
    Revealed,
    Hiding,
}

#[derive(Debug, Clone)]
pub struct Reveal<I = Spring> {
    animation: AnimationKind,
    phase: RevealPhase,
    in_view: bool,
    threshold: f64,
    x: SpringValue,
    scale: SpringValue,
    opacity: SpringValue,
    interpolator: I,
}

impl Reveal<Spring> {
    pub fn new(animation: AnimationKind) -> Self {
        Self::with_interpolator(animation, CARD_SPRING, REVEAL_THRESHOLD)
    }
}

impl<I: Interpolator> Reveal<I> {
    pub fn with_interpolator(animation: AnimationKind, interpolator: I, threshold: f64) -> Self {
        let start = animation.initial_pose();
        Self {
            animation,
            phase: RevealPhase::Hidden,
            in_view: false,
            threshold,
            x: SpringValue::at(start.x),
            scale: SpringValue::at(start.scale),
            opacity: SpringValue::at(start.opacity),
            interpolator,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn animation(&self) -> AnimationKind {
        self.animation
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealing | RevealPhase::Hiding)
    }

    pub fn pose(&self) -> Pose {
        Pose {
            x: self.x.value,
            scale: self.scale.value,
            opacity: self.opacity.value,
        }
    }

    fn target_pose(&self) -> Pose {
        if self.in_view {
            self.animation.revealed_pose()
        } else {
            self.animation.initial_pose()
        }
    }

    fn retarget(&mut self) {
        let target = self.target_pose();
        self.x.retarget(target.x);
        self.scale.retarget(target.scale);
        self.opacity.retarget(target.opacity);
    }

    /// Feed a visibility sample. Returns true when it flips the direction of
    /// travel (the caller should start ticking).
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        let visible = visible_ratio >= self.threshold;
        if visible == self.in_view {
            return false;
        }
        self.in_view = visible;
        self.phase = if visible {
            RevealPhase::Revealing
        } else {
            RevealPhase::Hiding
        };
        self.retarget();
        true
    }

    /// Advance by `dt` seconds. Returns whether the card is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.is_animating() {
            return false;
        }
        let x_moving = self.x.advance(&self.interpolator, dt);
        let scale_moving = self.scale.advance(&self.interpolator, dt);
        let opacity_moving = self.opacity.advance(&self.interpolator, dt);
        if x_moving || scale_moving || opacity_moving {
            return true;
        }
        self.phase = if self.in_view {
            RevealPhase::Revealed
        } else {
            RevealPhase::Hidden
        };
        false
    }

    /// Switch the animation kind. A hidden card jumps to the new initial
    /// pose; a moving card retargets from where it is. Returns whether the
    /// card needs ticking.
    pub fn set_animation(&mut self, animation: AnimationKind) -> bool {
        if animation == self.animation {
            return false;
        }
        self.animation = animation;
        if self.phase == RevealPhase::Hidden {
            let start = animation.initial_pose();
            self.x = SpringValue::at(start.x);
            self.scale = SpringValue::at(start.scale);
            self.opacity = SpringValue::at(start.opacity);
            return false;
        }
        self.retarget();
        if self.phase == RevealPhase::Revealed {
            self.phase = RevealPhase::Revealing;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(reveal: &mut Reveal, secs: f64) {
        let frames = (secs / FRAME).round() as usize;
        for _ in 0..frames {
            reveal.tick(FRAME);
        }
    }

    fn assert_pose_eq(actual: Pose, expected: Pose) {
        assert!((actual.x - expected.x).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        assert!((actual.scale - expected.scale).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        assert!((actual.opacity - expected.opacity).abs() < 1e-9, "{:?} != {:?}", actual, expected);
    }

    #[test]
    fn test_card_spring_parameters() {
        assert_eq!(CARD_SPRING.stiffness, 100.0);
        assert_eq!(CARD_SPRING.damping, 20.0);
        assert_eq!(CARD_SPRING.mass, 1.0);
        assert_eq!(CARD_SPRING.rest_delta, 0.001);
        assert_eq!(REVEAL_THRESHOLD, 0.3);
    }

    #[test]
    fn test_initial_and_revealed_poses() {
        assert_eq!(AnimationKind::FromLeft.initial_pose(), Pose { x: -150.0, scale: 1.0, opacity: 0.0 });
        assert_eq!(AnimationKind::FromRight.initial_pose(), Pose { x: 150.0, scale: 1.0, opacity: 0.0 });
        assert_eq!(AnimationKind::FromCenter.initial_pose(), Pose { x: 0.0, scale: 0.5, opacity: 0.0 });
        for kind in [AnimationKind::FromLeft, AnimationKind::FromRight, AnimationKind::FromCenter] {
            assert_eq!(kind.revealed_pose(), Pose { x: 0.0, scale: 1.0, opacity: 1.0 });
        }
    }

    #[test]
    fn test_stays_hidden_until_threshold_crossed() {
        let mut reveal = Reveal::new(AnimationKind::FromLeft);
        run(&mut reveal, 5.0);
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        assert_pose_eq(reveal.pose(), AnimationKind::FromLeft.initial_pose());

        assert!(!reveal.observe(0.0));
        assert!(!reveal.observe(0.29));
        run(&mut reveal, 1.0);
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        assert_pose_eq(reveal.pose(), Pose { x: -150.0, scale: 1.0, opacity: 0.0 });

        assert!(reveal.observe(0.3));
        assert_eq!(reveal.phase(), RevealPhase::Revealing);
    }

    #[test]
    fn test_reveal_settles() {
        let mut reveal = Reveal::new(AnimationKind::FromCenter);
        reveal.observe(0.8);
        run(&mut reveal, 4.0);
        assert_eq!(reveal.phase(), RevealPhase::Revealed);
        assert!(!reveal.is_animating());
        assert_pose_eq(reveal.pose(), AnimationKind::FromCenter.revealed_pose());
    }

    #[test]
    fn test_reveal_replays_on_reentry() {
        let mut reveal = Reveal::new(AnimationKind::FromRight);
        for _ in 0..3 {
            assert!(reveal.observe(1.0));
            run(&mut reveal, 4.0);
            assert_eq!(reveal.phase(), RevealPhase::Revealed);

            assert!(reveal.observe(0.1));
            assert_eq!(reveal.phase(), RevealPhase::Hiding);
            run(&mut reveal, 4.0);
            assert_eq!(reveal.phase(), RevealPhase::Hidden);
            assert_pose_eq(reveal.pose(), AnimationKind::FromRight.initial_pose());
        }
    }

    #[test]
    fn test_reversal_continues_from_current_pose() {
        let mut reveal = Reveal::new(AnimationKind::FromLeft);
        reveal.observe(0.5);
        run(&mut reveal, 0.15);
        let mid = reveal.pose();
        assert!(mid.x > -150.0 && mid.x < 0.0);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        assert!(reveal.observe(0.2));
        assert_eq!(reveal.phase(), RevealPhase::Hiding);
        assert_pose_eq(reveal.pose(), mid);

        reveal.tick(FRAME);
        let next = reveal.pose();
        // No jump back to the start
        assert!((next.x - mid.x).abs() < 20.0);
        assert!(next.x > -150.0);

        run(&mut reveal, 4.0);
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_repeated_samples_on_same_side_are_ignored() {
        let mut reveal = Reveal::new(AnimationKind::FromCenter);
        assert!(reveal.observe(0.4));
        assert!(!reveal.observe(0.9));
        assert!(!reveal.observe(0.3));
        assert_eq!(reveal.phase(), RevealPhase::Revealing);
    }

    #[test]
    fn test_animation_change_while_hidden_jumps() {
        let mut reveal = Reveal::new(AnimationKind::FromLeft);
        assert!(!reveal.set_animation(AnimationKind::FromCenter));
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        assert_pose_eq(reveal.pose(), AnimationKind::FromCenter.initial_pose());
    }

    #[test]
    fn test_animation_change_while_revealed_keeps_pose() {
        let mut reveal = Reveal::new(AnimationKind::FromLeft);
        reveal.observe(1.0);
        run(&mut reveal, 4.0);

        reveal.set_animation(AnimationKind::FromRight);
        run(&mut reveal, 1.0);
        assert_eq!(reveal.phase(), RevealPhase::Revealed);
        assert_pose_eq(reveal.pose(), AnimationKind::FromRight.revealed_pose());

        // The next exit uses the new direction
        reveal.observe(0.0);
        run(&mut reveal, 4.0);
        assert_pose_eq(reveal.pose(), AnimationKind::FromRight.initial_pose());
    }

    #[test]
    fn test_pose_style() {
        let style = Pose { x: -150.0, scale: 1.0, opacity: 0.0 }.style();
        assert_eq!(style, "transform: translateX(-150.00px) scale(1.0000); opacity: 0.0000;");
    }
}
