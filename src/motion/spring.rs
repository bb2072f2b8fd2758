//! Spring Interpolation
//!
//! Damped harmonic oscillator stepped with semi-implicit Euler on small
//! fixed substeps. Interrupting is just retargeting: value and velocity
//! carry over.

/// Largest integration substep, in seconds
const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;

/// Interpolation strategy: (current value, current velocity, target) -> next
pub trait Interpolator {
    fn step(&self, value: f64, velocity: f64, target: f64, dt: f64) -> (f64, f64);

    fn is_at_rest(&self, value: f64, velocity: f64, target: f64) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Settled once within this distance of the target...
    pub rest_delta: f64,
    /// ...and slower than this
    pub rest_speed: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    pub const fn with_rest(self, rest_delta: f64, rest_speed: f64) -> Self {
        Self { rest_delta, rest_speed, ..self }
    }
}

impl Interpolator for Spring {
    fn step(&self, value: f64, velocity: f64, target: f64, dt: f64) -> (f64, f64) {
        let mass = if self.mass > 0.0 { self.mass } else { 1.0 };
        let mut x = value;
        let mut v = velocity;
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let force = -self.stiffness * (x - target) - self.damping * v;
            v += force / mass * h;
            x += v * h;
            remaining -= h;
        }
        (x, v)
    }

    fn is_at_rest(&self, value: f64, velocity: f64, target: f64) -> bool {
        (value - target).abs() <= self.rest_delta && velocity.abs() <= self.rest_speed
    }
}

/// One animated scalar chasing a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringValue {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl SpringValue {
    /// At rest at `value`
    pub fn at(value: f64) -> Self {
        Self { value, velocity: 0.0, target: value }
    }

    /// Keeps the current value and velocity
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance by `dt` seconds; snaps onto the target once at rest.
    /// Returns whether the value is still moving.
    pub fn advance<I: Interpolator>(&mut self, interpolator: &I, dt: f64) -> bool {
        if self.is_settled(interpolator) {
            self.snap();
            return false;
        }
        let (value, velocity) = interpolator.step(self.value, self.velocity, self.target, dt);
        self.value = value;
        self.velocity = velocity;
        if self.is_settled(interpolator) {
            self.snap();
            return false;
        }
        true
    }

    pub fn is_settled<I: Interpolator>(&self, interpolator: &I) -> bool {
        interpolator.is_at_rest(self.value, self.velocity, self.target)
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(spring: &Spring, value: &mut SpringValue, secs: f64) {
        let frames = (secs / FRAME).round() as usize;
        for _ in 0..frames {
            value.advance(spring, FRAME);
        }
    }

    #[test]
    fn test_critically_damped_settles_without_overshoot() {
        // stiffness 100, damping 20 => damping ratio 1
        let spring = Spring::new(100.0, 20.0);
        let mut x = SpringValue::at(-150.0);
        x.retarget(0.0);

        let mut max_seen = f64::MIN;
        for _ in 0..180 {
            x.advance(&spring, FRAME);
            max_seen = max_seen.max(x.value);
        }
        assert_eq!(x.value, 0.0);
        assert_eq!(x.velocity, 0.0);
        assert!(max_seen <= 1e-6);
    }

    #[test]
    fn test_moves_toward_target_monotonically_early() {
        let spring = Spring::new(100.0, 20.0);
        let mut x = SpringValue::at(0.0);
        x.retarget(1.0);
        let mut last = 0.0;
        for _ in 0..10 {
            assert!(x.advance(&spring, FRAME));
            assert!(x.value > last);
            last = x.value;
        }
    }

    #[test]
    fn test_retarget_keeps_position_and_velocity() {
        let spring = Spring::new(100.0, 20.0);
        let mut x = SpringValue::at(-150.0);
        x.retarget(0.0);
        run(&spring, &mut x, 0.1);

        let (value, velocity) = (x.value, x.velocity);
        assert!(value > -150.0 && value < 0.0);
        assert!(velocity > 0.0);

        x.retarget(-150.0);
        assert_eq!(x.value, value);
        assert_eq!(x.velocity, velocity);

        // Momentum still carries it toward 0 for a moment
        x.advance(&spring, 0.001);
        assert!(x.value > value);
    }

    #[test]
    fn test_at_rest_does_not_move() {
        let spring = Spring::new(100.0, 30.0);
        let mut x = SpringValue::at(0.4);
        assert!(!x.advance(&spring, FRAME));
        assert_eq!(x, SpringValue::at(0.4));
    }

    #[test]
    fn test_step_is_substep_independent() {
        let spring = Spring::new(100.0, 20.0);
        let (coarse, _) = spring.step(1.0, 0.0, 0.0, 0.1);
        let mut fine = (1.0, 0.0);
        for _ in 0..10 {
            fine = spring.step(fine.0, fine.1, 0.0, 0.01);
        }
        assert!((coarse - fine.0).abs() < 5e-3);
    }
}
