//! Frame-driven game loop glue
//!
//! Owns the session plus whatever steers the paddle, and turns each host
//! frame callback into exactly one simulation tick.

use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

use super::input::PaddleControl;
use super::time::FrameClock;

/// One running game bound to a paddle control source
pub struct GameRunner<C: PaddleControl> {
    state: GameState,
    control: C,
    clock: FrameClock,
    /// One-shot launch request, consumed by the next frame
    launch_requested: bool,
    autopilot: bool,
}

impl<C: PaddleControl> GameRunner<C> {
    pub fn new(state: GameState, control: C) -> Self {
        Self {
            state,
            control,
            clock: FrameClock::new(),
            launch_requested: false,
            autopilot: false,
        }
    }

    /// Click/tap/space
    pub fn request_launch(&mut self) {
        self.launch_requested = true;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Run one frame at host time `timestamp_ms`
    pub fn frame(&mut self, timestamp_ms: f64) -> Vec<GameEvent> {
        let dt = self.clock.delta(timestamp_ms);
        self.step(dt)
    }

    /// Run one tick with an explicit delta (seconds)
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        let input = TickInput {
            target_x: self.control.current_target_x(),
            launch: std::mem::take(&mut self.launch_requested),
            autopilot: self.autopilot,
        };
        tick(&mut self.state, &input, dt);
        self.state.drain_events()
    }

    /// Forget frame timing, e.g. after the page was hidden
    pub fn resume(&mut self) {
        self.clock.reset();
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}
