//! The grid of destructible bricks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, circle_intersects_box};

/// Slack for float accumulation when deciding how many columns fit
const COLUMN_EPSILON: f32 = 1e-4;

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub bounds: Aabb,
    /// Cosmetic only, handed through to the renderer
    pub color: String,
}

/// Live bricks, kept in column-major insertion order
///
/// Order matters: when the ball straddles two bricks the first one in this
/// order is the one that gets hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all bricks with a fresh grid
    ///
    /// Columns start at the left edge of `play_rect` and only whole bricks are
    /// placed. There is one row per palette entry, starting at the top edge.
    pub fn initialize(
        &mut self,
        play_rect: &Aabb,
        brick_width: f32,
        brick_height: f32,
        colors: &[String],
    ) {
        let columns = Self::column_count(play_rect.width(), brick_width);
        self.bricks.clear();
        self.bricks.reserve(columns * colors.len());

        for col in 0..columns {
            let x = play_rect.min.x + col as f32 * brick_width;
            for (row, color) in colors.iter().enumerate() {
                let y = play_rect.min.y + row as f32 * brick_height;
                self.bricks.push(Brick {
                    bounds: Aabb::from_min_size(
                        Vec2::new(x, y),
                        Vec2::new(brick_width, brick_height),
                    ),
                    color: color.clone(),
                });
            }
        }
    }

    /// Number of whole bricks that fit across `width`
    pub fn column_count(width: f32, brick_width: f32) -> usize {
        (width / brick_width + COLUMN_EPSILON).floor().max(0.0) as usize
    }

    /// Index of the first brick the ball overlaps, if any
    pub fn find_first_intersecting(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.bricks
            .iter()
            .position(|brick| circle_intersects_box(pos, radius, &brick.bounds))
    }

    /// Remove the brick at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Brick {
        self.bricks.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn as_slice(&self) -> &[Brick] {
        &self.bricks
    }
}
