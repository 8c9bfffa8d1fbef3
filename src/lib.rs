//! Brick Breaker - A Breakout-style arcade simulation
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, game state)
//! - `config`: Session bounds and tuning, loadable from JSON
//! - `platform`: Driver-side collaborators (input sources, frame clock, storage)
//! - `error`: Error types

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, StorageError};

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 640.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Bricks per row when the brick width is derived from the play area
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_HEIGHT: f32 = 10.0;
    /// One row per color, top to bottom
    pub const BRICK_COLORS: [&str; 6] = ["red", "green", "blue", "cyan", "magenta", "yellow"];

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED: f32 = 100.0;

    pub const STARTING_LIVES: u32 = 3;

    /// Largest frame delta handed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
