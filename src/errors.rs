#![allow(dead_code)]

use thiserror::Error;

/// Typed error hierarchy for gymbot.
///
/// Use at module boundaries (channel construction, channel calls, config
/// validation). Internal/leaf functions can continue using `anyhow::Result` —
/// the `Internal` variant allows seamless conversion via the `?` operator.
#[derive(Debug, Error)]
pub enum GymbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Channel error: {channel}: {message}")]
    Channel { channel: String, message: String },

    #[error("State error: {0}")]
    State(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience alias for results using GymbotError.
pub type GymbotResult<T> = std::result::Result<T, GymbotError>;
