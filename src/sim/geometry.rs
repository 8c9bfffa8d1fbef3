//! Axis-aligned boxes and the ball/box overlap test
//!
//! Everything in the playfield (bricks, paddle, play rect) is an axis-aligned
//! box in canvas space: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box with its top-left corner at `min`
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) / 2.0
    }

    /// Whether `x` lies within the horizontal extent (edges included)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.max.x
    }

    /// Whether `y` lies within the vertical extent (edges included)
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.min.y && y <= self.max.y
    }
}

/// Check overlap between a ball and a box
///
/// The ball is treated as its bounding square, so a ball clipping a corner
/// counts as a full hit. Touching edges do not overlap.
#[inline]
pub fn circle_intersects_box(pos: Vec2, radius: f32, bounds: &Aabb) -> bool {
    pos.x + radius > bounds.min.x
        && pos.x - radius < bounds.max.x
        && pos.y + radius > bounds.min.y
        && pos.y - radius < bounds.max.y
}
