//! The player's paddle and its five-zone bounce rule

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;

/// Horizontal fifth of the paddle the ball struck, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleZone {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
}

impl PaddleZone {
    /// Outgoing direction after a hit in this zone
    ///
    /// The inner zones keep the incoming vertical magnitude; the outer zones
    /// and the center force fixed angles. Results are not normalized.
    pub fn bounce(self, prev_dir: Vec2) -> Vec2 {
        match self {
            PaddleZone::FarLeft => Vec2::new(-1.0, -1.0),
            PaddleZone::Left => Vec2::new(-1.0, -prev_dir.y),
            PaddleZone::Center => Vec2::new(0.0, -1.0),
            PaddleZone::Right => Vec2::new(1.0, -prev_dir.y),
            PaddleZone::FarRight => Vec2::new(1.0, -1.0),
        }
    }
}

/// Player paddle (fixed size, moves horizontally only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Aabb,
}

impl Paddle {
    pub fn new(center_x: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::from_min_size(
                Vec2::new(center_x - width / 2.0, top),
                Vec2::new(width, height),
            ),
        }
    }

    /// Center the paddle on `x`
    ///
    /// No clamping: the paddle may hang past the play rect. Walls only bound the ball.
    pub fn set_target_x(&mut self, x: f32) {
        let half = self.bounds.width() / 2.0;
        self.bounds.min.x = x - half;
        self.bounds.max.x = x + half;
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.bounds.center_x()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bounds.min.y
    }

    /// Zone that `x` falls in
    ///
    /// Anything left of the first boundary is `FarLeft`, anything at or past
    /// the fourth is `FarRight`.
    pub fn zone_of(&self, x: f32) -> PaddleZone {
        let step = self.bounds.width() / 5.0;
        let first = self.bounds.min.x + step;
        let second = first + step;
        let third = second + step;
        let fourth = third + step;

        if x < first {
            PaddleZone::FarLeft
        } else if x < second {
            PaddleZone::Left
        } else if x < third {
            PaddleZone::Center
        } else if x < fourth {
            PaddleZone::Right
        } else {
            PaddleZone::FarRight
        }
    }
}
