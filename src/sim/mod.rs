//! Simulation module
//!
//! All gameplay logic lives here. No rendering, input or storage:
//! - The driver supplies a paddle target and a frame delta per tick
//! - Everything else is plain in-memory state owned by `GameState`

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, advance};
pub use bricks::{Brick, BrickField};
pub use collision::{COLLISION_ORDER, Collision, CollisionRule, detect};
pub use geometry::{Aabb, circle_intersects_box};
pub use paddle::{Paddle, PaddleZone};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
