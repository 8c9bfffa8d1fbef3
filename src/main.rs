//! Brick Breaker entry point
//!
//! Native builds run a headless demo: the autopilot plays for a while at a
//! steady 60 fps and the best score is kept in a JSON file.
//!
//! Usage: `brick-breaker [config.json] [seconds]`

use std::process::ExitCode;

use brick_breaker::GameConfig;
use brick_breaker::platform::{GameRunner, HighScoreRecord, PointerControl};
use brick_breaker::sim::{GameEvent, GameState};

const HIGH_SCORE_FILE: &str = "brick_breaker_highscore.json";
const FRAMES_PER_SECOND: u64 = 60;
const FRAME_DT: f32 = 1.0 / FRAMES_PER_SECOND as f32;
const DEFAULT_SECONDS: u64 = 120;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Bad config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let mut record = HighScoreRecord::load(HIGH_SCORE_FILE).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable high score file: {}", e);
        HighScoreRecord::default()
    });

    let state = match GameState::with_high_score(config, record.high_score) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut runner = GameRunner::new(state, PointerControl::default());
    runner.set_autopilot(true);

    let frames = frame_count(seconds);
    let mut bricks_destroyed = 0u64;
    for _ in 0..frames {
        for event in runner.step(FRAME_DT) {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks_destroyed += 1,
                GameEvent::NewHighScore { score } => log::info!("New high score: {}", score),
                GameEvent::BallLost { lives } => log::info!("Ball lost, {} lives left", lives),
                GameEvent::SessionReset => log::info!("Game over, starting again"),
                _ => {}
            }
        }
    }

    let snapshot = runner.snapshot();
    println!(
        "Played {}s: {} bricks destroyed, score {}, lives {}, high score {}",
        seconds, bricks_destroyed, snapshot.score, snapshot.lives, snapshot.high_score
    );

    if record.offer(snapshot.high_score) {
        if let Err(e) = record.save(HIGH_SCORE_FILE) {
            log::error!("Failed to save high score: {}", e);
        }
    }

    ExitCode::SUCCESS
}

/// Frames to simulate for a run of `seconds`, saturating on huge inputs
fn frame_count(seconds: u64) -> u64 {
    seconds.saturating_mul(FRAMES_PER_SECOND)
}
