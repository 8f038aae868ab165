use thiserror::Error;

/// A config file that parsed but describes an unusable counter.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("starting_life must not be negative (got {0})")]
    NegativeStartingLife(i64),
    #[error("{field} must be at least 1 (got {value})")]
    NotPositive { field: &'static str, value: i64 },
    #[error("tap_delta {tap_delta} times repeat_multiplier {repeat_multiplier} is too large")]
    RepeatDeltaOverflow {
        tap_delta: i64,
        repeat_multiplier: i64,
    },
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error("crown range is empty: min {min} must be below max {max}")]
    EmptyCrownRange { min: f64, max: f64 },
    #[error("crown step must be a positive number (got {0})")]
    BadCrownStep(f64),
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}
