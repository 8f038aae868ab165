//! Digital crown emulation.
//!
//! The crown reports an absolute position inside `[min, max]`. In continuous
//! mode the position wraps around the range the way the watch hardware does,
//! which shows up downstream as one huge jump in the rounded reading.

use crate::config::CrownConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Crown {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    continuous: bool,
}

impl Crown {
    pub fn new(config: &CrownConfig) -> Self {
        Self {
            value: 0.0_f64.clamp(config.min, config.max),
            min: config.min,
            max: config.max,
            step: config.step,
            continuous: config.continuous,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position within the range as `0.0..=1.0`, for gauges.
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Turn by `detents` (negative = counter-clockwise) and return the new
    /// absolute position.
    pub fn rotate(&mut self, detents: i32) -> f64 {
        let span = self.max - self.min;
        let mut next = self.value + f64::from(detents) * self.step;
        if self.continuous && span > 0.0 {
            if next > self.max || next < self.min {
                next = self.min + (next - self.min).rem_euclid(span);
            }
        } else {
            next = next.clamp(self.min, self.max);
        }
        self.value = next;
        next
    }
}
