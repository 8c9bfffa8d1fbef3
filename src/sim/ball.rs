//! Ball state and integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;

/// Next position after `dt` seconds
///
/// `dir` is not normalized, so its length scales the effective speed.
#[inline]
pub fn advance(pos: Vec2, dir: Vec2, speed: f32, dt: f32) -> Vec2 {
    pos + dir * speed * dt
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Travel direction. Axis flips never renormalize it, so a diagonal
    /// `(1, -1)` moves faster than a straight `(0, -1)` at the same speed.
    pub dir: Vec2,
    pub radius: f32,
    /// Scalar speed (pixels/s)
    pub speed: f32,
}

impl Ball {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: Vec2::NEG_Y,
            radius,
            speed,
        }
    }

    /// Where the ball would be after `dt` at its current direction
    #[inline]
    pub fn next_pos(&self, dt: f32) -> Vec2 {
        advance(self.pos, self.dir, self.speed, dt)
    }

    #[inline]
    pub fn invert_x(&mut self) {
        self.dir.x = -self.dir.x;
    }

    #[inline]
    pub fn invert_y(&mut self) {
        self.dir.y = -self.dir.y;
    }

    /// Sit on top of the paddle, centered
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.top() - self.radius);
    }
}
