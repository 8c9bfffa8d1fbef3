//! Frame timing
//!
//! Turns host timestamps (milliseconds, e.g. from `requestAnimationFrame` or
//! a monotonic clock) into the per-tick delta the simulation takes.

use crate::consts::MAX_FRAME_DT;

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    prev_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame
    ///
    /// The first frame is 0. Deltas are clamped to `[0, MAX_FRAME_DT]` so a
    /// stalled tab or a clock going backwards can't teleport the ball.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let prev = self.prev_ms.replace(timestamp_ms).unwrap_or(timestamp_ms);
        let dt = ((timestamp_ms - prev) / 1000.0) as f32;
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the previous timestamp, e.g. after the game was hidden
    pub fn reset(&mut self) {
        self.prev_ms = None;
    }
}
