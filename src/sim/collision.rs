//! Collision detection for the ball's tentative next position
//!
//! Rules are checked in a fixed priority order and the first one that
//! matches is the only collision resolved that tick. The order is part of
//! the game's behaviour: a ball touching both a brick and a wall bounces off
//! the brick only.

use glam::Vec2;

use super::ball::Ball;
use super::bricks::BrickField;
use super::geometry::{Aabb, circle_intersects_box};
use super::paddle::{Paddle, PaddleZone};

/// One kind of collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionRule {
    Brick,
    Paddle,
    SideWall,
    TopWall,
    BottomExit,
}

/// Priority order, highest first
pub const COLLISION_ORDER: [CollisionRule; 5] = [
    CollisionRule::Brick,
    CollisionRule::Paddle,
    CollisionRule::SideWall,
    CollisionRule::TopWall,
    CollisionRule::BottomExit,
];

/// What the ball would hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Index into the brick field
    Brick(usize),
    /// Zone chosen from the ball's position before the move
    Paddle(PaddleZone),
    SideWall,
    TopWall,
    BottomExit,
}

/// Everything the ball can collide with
#[derive(Debug, Clone, Copy)]
pub struct Arena<'a> {
    pub bricks: &'a BrickField,
    pub paddle: &'a Paddle,
    pub play_rect: &'a Aabb,
    /// Canvas bottom; past this the ball is lost
    pub floor_y: f32,
}

impl CollisionRule {
    /// Test this rule for a ball about to move to `next_pos`
    pub fn check(self, arena: &Arena<'_>, ball: &Ball, next_pos: Vec2) -> Option<Collision> {
        let r = ball.radius;
        match self {
            CollisionRule::Brick => arena
                .bricks
                .find_first_intersecting(next_pos, r)
                .map(Collision::Brick),
            CollisionRule::Paddle => {
                if circle_intersects_box(next_pos, r, &arena.paddle.bounds) {
                    Some(Collision::Paddle(arena.paddle.zone_of(ball.pos.x)))
                } else {
                    None
                }
            }
            CollisionRule::SideWall => {
                let crosses = next_pos.x + r > arena.play_rect.max.x
                    || next_pos.x - r < arena.play_rect.min.x;
                crosses.then_some(Collision::SideWall)
            }
            CollisionRule::TopWall => {
                (next_pos.y - r < arena.play_rect.min.y).then_some(Collision::TopWall)
            }
            CollisionRule::BottomExit => {
                (next_pos.y + r > arena.floor_y).then_some(Collision::BottomExit)
            }
        }
    }
}

/// First matching collision in priority order, if any
pub fn detect(arena: &Arena<'_>, ball: &Ball, next_pos: Vec2) -> Option<Collision> {
    COLLISION_ORDER
        .iter()
        .find_map(|rule| rule.check(arena, ball, next_pos))
}

/// Axis flips for a ball bouncing off a box
///
/// An axis flips when the ball's pre-move position lies outside the box's
/// span on that axis. Corner approaches flip both.
pub fn brick_bounce_axes(ball_pos: Vec2, bounds: &Aabb) -> (bool, bool) {
    (!bounds.spans_x(ball_pos.x), !bounds.spans_y(ball_pos.y))
}
