//! Error types
//!
//! The simulation itself never fails once constructed. Errors only come from
//! building a session out of bad configuration, or from the storage collaborator.

use thiserror::Error;

/// Invalid or unreadable game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("brick color palette is empty")]
    EmptyPalette,

    #[error("play rect must satisfy left < right and top <= bottom")]
    InvalidPlayRect,

    #[error("brick width {brick_width} does not fit in play area width {play_width}")]
    BrickWiderThanPlayArea { brick_width: f32, play_width: f32 },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
}

/// High score persistence failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
