//! Configuration data model.
//!
//! All structs derive `Deserialize` for TOML. Every field has a
//! default matching the original watch app, so an empty or missing file works.

use serde::Deserialize;
use std::time::Duration;

use super::error::ConfigError;
use crate::counter::CounterRules;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub crown: CrownConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter.starting_life < 0 {
            return Err(ConfigError::NegativeStartingLife(self.counter.starting_life));
        }
        for (field, value) in [
            ("tap_delta", self.counter.tap_delta),
            ("repeat_multiplier", self.counter.repeat_multiplier),
            ("rotation_max_step", self.counter.rotation_max_step),
        ] {
            if value < 1 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self
            .counter
            .tap_delta
            .checked_mul(self.counter.repeat_multiplier)
            .is_none()
        {
            return Err(ConfigError::RepeatDeltaOverflow {
                tap_delta: self.counter.tap_delta,
                repeat_multiplier: self.counter.repeat_multiplier,
            });
        }
        if self.timing.hold_threshold_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "hold_threshold_ms",
            });
        }
        if self.timing.repeat_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "repeat_interval_ms",
            });
        }
        // Written as a negation so NaN bounds are rejected too.
        if !(self.crown.min < self.crown.max) {
            return Err(ConfigError::EmptyCrownRange {
                min: self.crown.min,
                max: self.crown.max,
            });
        }
        if !(self.crown.step.is_finite() && self.crown.step > 0.0) {
            return Err(ConfigError::BadCrownStep(self.crown.step));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::UnknownLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }

    pub fn counter_rules(&self) -> CounterRules {
        CounterRules {
            starting_life: self.counter.starting_life,
            tap_delta: self.counter.tap_delta,
            repeat_multiplier: self.counter.repeat_multiplier,
            repeat_interval: self.timing.repeat_interval(),
            rotation_max_step: self.counter.rotation_max_step,
            ..CounterRules::default()
        }
    }
}

/// Life total and step sizes.
#[derive(Debug, Clone, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_starting_life")]
    pub starting_life: i64,
    #[serde(default = "default_tap_delta")]
    pub tap_delta: i64,
    /// Hold-repeat applies `tap_delta * repeat_multiplier` per tick.
    #[serde(default = "default_repeat_multiplier")]
    pub repeat_multiplier: i64,
    /// Crown jumps larger than this many whole units are ignored.
    #[serde(default = "default_rotation_max_step")]
    pub rotation_max_step: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            starting_life: default_starting_life(),
            tap_delta: default_tap_delta(),
            repeat_multiplier: default_repeat_multiplier(),
            rotation_max_step: default_rotation_max_step(),
        }
    }
}

/// Long-press timing.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_hold_threshold_ms")]
    pub hold_threshold_ms: u64,
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,
}

impl TimingConfig {
    pub fn hold_threshold(&self) -> Duration {
        Duration::from_millis(self.hold_threshold_ms)
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: default_hold_threshold_ms(),
            repeat_interval_ms: default_repeat_interval_ms(),
        }
    }
}

/// Digital crown emulation (mouse wheel and `[` / `]`).
#[derive(Debug, Clone, Deserialize)]
pub struct CrownConfig {
    #[serde(default = "default_crown_min")]
    pub min: f64,
    #[serde(default = "default_crown_max")]
    pub max: f64,
    /// Crown units per wheel notch.
    #[serde(default = "default_crown_step")]
    pub step: f64,
    /// Wrap around the range instead of stopping at the ends.
    #[serde(default = "default_true")]
    pub continuous: bool,
}

impl Default for CrownConfig {
    fn default() -> Self {
        Self {
            min: default_crown_min(),
            max: default_crown_max(),
            step: default_crown_step(),
            continuous: true,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_lost_message")]
    pub lost_message: String,
    #[serde(default)]
    pub bell_on_loss: bool,
    /// Draw the total with block digits when there is room.
    #[serde(default = "default_true")]
    pub big_digits: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            lost_message: default_lost_message(),
            bell_on_loss: false,
            big_digits: true,
        }
    }
}

/// Diagnostic log file settings. The terminal belongs to the UI, so logs
/// only ever go to disk.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_starting_life() -> i64 {
    40
}
fn default_tap_delta() -> i64 {
    1
}
fn default_repeat_multiplier() -> i64 {
    10
}
fn default_rotation_max_step() -> i64 {
    4
}
fn default_hold_threshold_ms() -> u64 {
    500
}
fn default_repeat_interval_ms() -> u64 {
    300
}
fn default_crown_min() -> f64 {
    -100.0
}
fn default_crown_max() -> f64 {
    100.0
}
fn default_crown_step() -> f64 {
    0.5
}
fn default_true() -> bool {
    true
}
fn default_lost_message() -> String {
    "You lost!".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/lifedial/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
