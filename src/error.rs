//! Error types for the I/O edges of the game
//!
//! The simulation itself never fails; only loading configuration and
//! reading/writing the best score can.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} range is inverted (min {min} > max {max})")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("hazard band ({hazard}) must be shorter than the play area ({height})")]
    HazardTooTall { hazard: f32, height: f32 },
}

/// Errors raised by a [`crate::persistence::ScoreStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score data is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend is unavailable")]
    Unavailable,
}
