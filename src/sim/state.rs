//! Game state and core simulation types
//!
//! `GameState` is the whole session: one ball, one paddle, one brick field,
//! plus score and lives. The driver owns it and hands it to `tick` each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::{Brick, BrickField};
use super::geometry::Aabb;
use super::paddle::{Paddle, PaddleZone};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch
    Standby,
    /// Ball in flight
    Play,
}

/// Things that happened during a tick, for sound/effects/HUD on the driver side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    BrickDestroyed { color: String, score: u64 },
    PaddleHit { zone: PaddleZone },
    WallBounce,
    CeilingBounce,
    /// Ball fell out the bottom; `lives` is what remains afterwards
    BallLost { lives: u32 },
    /// Out of lives: score, lives and bricks were reset
    SessionReset,
    NewHighScore { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Best score seen by this process; never decreases
    pub high_score: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickField,
    /// Simulation tick counter
    pub time_ticks: u64,
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Whether this run already reported beating the high score
    #[serde(skip)]
    record_announced: bool,
}

impl GameState {
    /// Build a fresh session from a validated config
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_high_score(config, 0)
    }

    /// Build a fresh session, carrying over a previously persisted high score
    pub fn with_high_score(config: GameConfig, high_score: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let paddle = Paddle::new(
            config.canvas_width / 2.0,
            config.canvas_height - config.brick_height * 2.0,
            config.brick_width,
            config.brick_height,
        );
        let mut ball = Ball::new(config.ball_radius, config.ball_speed);
        ball.rest_on(&paddle);

        let mut state = Self {
            phase: GamePhase::Standby,
            score: 0,
            lives: config.starting_lives,
            high_score,
            ball,
            paddle,
            bricks: BrickField::new(),
            time_ticks: 0,
            events: Vec::new(),
            record_announced: false,
            config,
        };
        state.rebuild_bricks();

        Ok(state)
    }

    /// Regenerate the full brick grid
    pub fn rebuild_bricks(&mut self) {
        let config = &self.config;
        self.bricks.initialize(
            &config.play_rect,
            config.brick_width,
            config.brick_height,
            &config.brick_colors,
        );
        log::info!("Brick field built with {} bricks", self.bricks.len());
    }

    /// Standby -> Play. Returns whether the ball was actually launched.
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::Standby {
            return false;
        }
        self.phase = GamePhase::Play;
        self.ball.dir = Vec2::NEG_Y;
        self.push_event(GameEvent::Launched);
        log::debug!("Ball launched from x={:.1}", self.ball.pos.x);
        true
    }

    /// Award one point for a destroyed brick
    pub(crate) fn add_point(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            if !self.record_announced {
                self.record_announced = true;
                self.push_event(GameEvent::NewHighScore { score: self.score });
            }
        }
    }

    /// Play -> Standby after the ball leaves through the bottom
    ///
    /// Losing the last life resets score, lives and bricks; the high score
    /// survives.
    pub(crate) fn lose_ball(&mut self) {
        self.phase = GamePhase::Standby;

        if self.lives == 0 {
            self.lives = self.config.starting_lives;
            self.score = 0;
            self.record_announced = false;
            self.rebuild_bricks();
            self.push_event(GameEvent::SessionReset);
            log::info!("Out of lives, session reset (high score {})", self.high_score);
        } else {
            self.lives -= 1;
            self.push_event(GameEvent::BallLost { lives: self.lives });
            log::debug!("Ball lost, {} lives left", self.lives);
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            bricks: self.bricks.as_slice(),
            paddle: self.paddle.bounds,
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            play_rect: self.config.play_rect,
            score: self.score,
            lives: self.lives,
            high_score: self.high_score,
        }
    }
}

/// What a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub bricks: &'a [Brick],
    pub paddle: Aabb,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub play_rect: Aabb,
    pub score: u64,
    pub lives: u32,
    pub high_score: u64,
}
