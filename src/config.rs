//! Session configuration
//!
//! Canvas size, play area and tuning for one game session. Loaded from JSON
//! (missing fields fall back to defaults) and validated before a session is
//! built from it.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::geometry::Aabb;

/// Game session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Full drawable area. The bottom edge is where the ball is lost.
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Region bounding the ball. May be narrower than the canvas, leaving
    /// side margins for surrounding layout.
    pub play_rect: Aabb,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    /// One brick row per entry, top to bottom
    pub brick_colors: Vec<String>,

    // === Ball ===
    pub ball_speed: f32,
    pub ball_radius: f32,

    pub starting_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_canvas(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl GameConfig {
    /// Defaults for a canvas of the given size, with the play area filling it
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            play_rect: Aabb::new(Vec2::ZERO, Vec2::new(width, height)),
            brick_width: width / BRICK_COLUMNS as f32,
            brick_height: BRICK_HEIGHT,
            brick_colors: BRICK_COLORS.iter().map(|c| c.to_string()).collect(),
            ball_speed: BALL_SPEED,
            ball_radius: BALL_RADIUS,
            starting_lives: STARTING_LIVES,
        }
    }

    /// Narrow the play area horizontally, keeping the canvas size
    ///
    /// The brick width is re-derived so the same number of columns fit.
    pub fn with_side_margins(mut self, left: f32, right: f32) -> Self {
        self.play_rect.min.x = left;
        self.play_rect.max.x = self.canvas_width - right;
        self.brick_width = self.play_rect.width() / BRICK_COLUMNS as f32;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check everything the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;
        positive("ball_radius", self.ball_radius)?;

        if !self.ball_speed.is_finite() || self.ball_speed < 0.0 {
            return Err(ConfigError::InvalidDimension {
                name: "ball_speed",
                value: self.ball_speed,
            });
        }

        let rect = &self.play_rect;
        let finite = rect.min.is_finite() && rect.max.is_finite();
        if !finite || rect.min.x >= rect.max.x || rect.min.y > rect.max.y {
            return Err(ConfigError::InvalidPlayRect);
        }

        if self.brick_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        if self.brick_width > rect.width() {
            return Err(ConfigError::BrickWiderThanPlayArea {
                brick_width: self.brick_width,
                play_width: rect.width(),
            });
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}
