//! Platform layer
//!
//! Driver-side collaborators that sit between a host (browser, native
//! window, headless runner) and the simulation:
//! - Paddle input sources
//! - The per-frame loop tying input, clock and session together
//! - Frame time
//! - High score storage

pub mod input;
pub mod runner;
pub mod storage;
pub mod time;

pub use input::{FaceRect, PaddleControl, PointerControl, VisionControl};
pub use runner::GameRunner;
pub use storage::HighScoreRecord;
pub use time::FrameClock;
