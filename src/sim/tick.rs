//! Per-frame simulation tick
//!
//! Advances the session by one variable timestep. The ball integrates with
//! `dt` directly, so there is no fixed-step accumulator on this side.

use super::collision::{Arena, Collision, brick_bounce_axes, detect};
use super::state::{GameEvent, GamePhase, GameState};

/// Autopilot offset drift (radians per tick)
const AUTOPILOT_DRIFT_RATE: f32 = 0.05;
/// Autopilot offset amplitude as a fraction of paddle width; stays on the paddle
const AUTOPILOT_MAX_OFFSET: f32 = 0.4;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle center X in canvas space. `None` keeps the paddle where it is.
    pub target_x: Option<f32>,
    /// Launch the ball (click/tap/space)
    pub launch: bool,
    /// Demo mode - the paddle follows the ball and launches on its own.
    /// A driver-side convenience for headless runs; real input goes through
    /// `target_x` from a `PaddleControl` source.
    pub autopilot: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    let mut target_x = input.target_x;
    let mut launch = input.launch;
    if input.autopilot {
        // Track the ball with a drifting offset so it doesn't bounce straight
        // up and down off the center zone forever
        let time_factor = state.time_ticks as f32 * AUTOPILOT_DRIFT_RATE;
        let offset = time_factor.sin() * state.paddle.bounds.width() * AUTOPILOT_MAX_OFFSET;
        target_x = Some(state.ball.pos.x + offset);
        launch |= state.phase == GamePhase::Standby;
    }

    if let Some(x) = target_x {
        state.paddle.set_target_x(x);
    }

    match state.phase {
        GamePhase::Standby => {
            state.ball.rest_on(&state.paddle);
            if launch {
                state.launch();
            }
        }

        GamePhase::Play => {
            let next_t = state.ball.speed * dt;
            let next_pos = state.ball.next_pos(dt);

            let arena = Arena {
                bricks: &state.bricks,
                paddle: &state.paddle,
                play_rect: &state.config.play_rect,
                floor_y: state.config.canvas_height,
            };
            let hit = detect(&arena, &state.ball, next_pos);

            if let Some(collision) = hit {
                log::trace!("tick {}: {:?} at {:?}", state.time_ticks, collision, next_pos);
                resolve(state, collision);
            }

            // Reflections take effect on this tick's displacement
            state.ball.pos += state.ball.dir * next_t;
        }
    }
}

/// Apply the effect of a detected collision
fn resolve(state: &mut GameState, collision: Collision) {
    match collision {
        Collision::Brick(index) => {
            let brick = state.bricks.remove(index);
            let (flip_x, flip_y) = brick_bounce_axes(state.ball.pos, &brick.bounds);
            if flip_x {
                state.ball.invert_x();
            }
            if flip_y {
                state.ball.invert_y();
            }

            state.add_point();
            log::debug!("Brick hit ({}), score {}", brick.color, state.score);
            state.push_event(GameEvent::BrickDestroyed {
                color: brick.color,
                score: state.score,
            });
        }
        Collision::Paddle(zone) => {
            state.ball.dir = zone.bounce(state.ball.dir);
            state.push_event(GameEvent::PaddleHit { zone });
        }
        Collision::SideWall => {
            state.ball.invert_x();
            state.push_event(GameEvent::WallBounce);
        }
        Collision::TopWall => {
            state.ball.invert_y();
            state.push_event(GameEvent::CeilingBounce);
        }
        Collision::BottomExit => state.lose_ball(),
    }
}
