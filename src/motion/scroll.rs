//! Scroll Progress Smoothing
//!
//! Raw page scroll ratio filtered through a spring so the progress bar
//! glides instead of jittering.

use crate::motion::spring::{Spring, SpringValue};

pub const PROGRESS_SPRING: Spring = Spring::new(100.0, 30.0).with_rest(0.001, 0.001);

#[derive(Debug, Clone)]
pub struct SmoothedProgress {
    value: SpringValue,
    spring: Spring,
}

impl SmoothedProgress {
    pub fn new() -> Self {
        Self::with_spring(PROGRESS_SPRING)
    }

    pub fn with_spring(spring: Spring) -> Self {
        Self {
            value: SpringValue::at(0.0),
            spring,
        }
    }

    /// Set the raw ratio to chase; clamped to [0, 1]
    pub fn set_target(&mut self, raw: f64) {
        let raw = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
        self.value.retarget(raw);
    }

    /// Advance by `dt` seconds. Returns whether still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.value.advance(&self.spring, dt)
    }

    /// Horizontal scale factor for the progress bar
    pub fn scale_x(&self) -> f64 {
        self.value.value
    }

    pub fn is_settled(&self) -> bool {
        self.value.is_settled(&self.spring)
    }
}

impl Default for SmoothedProgress {
    fn default() -> Self {
        Self::new()
    }
}
