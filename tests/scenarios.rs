//! End-to-end gameplay scenarios against the public API

use brick_breaker::GameConfig;
use brick_breaker::sim::{GameEvent, GamePhase, GameState, PaddleZone, TickInput, tick};
use glam::Vec2;

fn playing(config: GameConfig) -> GameState {
    let mut state = GameState::new(config).unwrap();
    state.phase = GamePhase::Play;
    state
}

fn idle() -> TickInput {
    TickInput::default()
}

#[test]
fn straight_flight_in_open_space() {
    let mut state = playing(GameConfig::default());
    state.ball.pos = Vec2::new(100.0, 100.0);
    state.ball.dir = Vec2::new(0.0, -1.0);
    state.ball.speed = 100.0;

    tick(&mut state, &idle(), 0.01);

    assert!((state.ball.pos - Vec2::new(100.0, 99.0)).length() < 1e-4);
    assert_eq!(state.ball.dir, Vec2::new(0.0, -1.0));
    assert!(state.drain_events().is_empty());
}

#[test]
fn left_wall_inverts_x_only() {
    let config = GameConfig::for_canvas(640.0, 480.0).with_side_margins(50.0, 50.0);
    let mut state = playing(config);
    state.ball.pos = Vec2::new(56.0, 300.0);
    state.ball.dir = Vec2::new(-1.0, -1.0);

    tick(&mut state, &idle(), 0.02);

    assert_eq!(state.ball.dir, Vec2::new(1.0, -1.0));
    // Reflection already applied to this tick's movement
    assert!((state.ball.pos - Vec2::new(58.0, 298.0)).length() < 1e-4);
    assert_eq!(state.drain_events(), vec![GameEvent::WallBounce]);
}

#[test]
fn standby_snaps_ball_regardless_of_dt() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let input = TickInput {
        target_x: Some(300.0),
        ..Default::default()
    };

    for dt in [0.0, 0.016, 0.09] {
        tick(&mut state, &input, dt);
        assert_eq!(state.phase, GamePhase::Standby);
        assert_eq!(state.ball.pos, Vec2::new(300.0, state.paddle.bounds.min.y - 5.0));
    }
}

#[test]
fn brick_hit_removes_one_and_scores_one() {
    let mut state = playing(GameConfig::default());
    let bricks_before = state.bricks.len();

    // Column 4 spans x 256..320; bottom row spans y 50..60
    state.ball.pos = Vec2::new(288.0, 70.0);
    state.ball.dir = Vec2::new(0.0, -1.0);
    tick(&mut state, &idle(), 0.1);

    assert_eq!(state.bricks.len(), bricks_before - 1);
    assert_eq!(state.score, 1);
    assert_eq!(state.high_score, 1);
    // Came from below: vertical flip only, applied to this tick's move
    assert_eq!(state.ball.dir, Vec2::new(0.0, 1.0));
    assert!((state.ball.pos - Vec2::new(288.0, 80.0)).length() < 1e-4);

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::BrickDestroyed {
        color: "yellow".to_string(),
        score: 1,
    }));
}

#[test]
fn brick_hit_from_the_side_flips_x() {
    let mut state = playing(GameConfig::default());
    // Clear out bottom row of column 1 so the ball sits beside column 0's bottom brick
    let gap = state
        .bricks
        .find_first_intersecting(Vec2::new(96.0, 55.0), 1.0)
        .unwrap();
    state.bricks.remove(gap);

    state.ball.pos = Vec2::new(72.0, 55.0);
    state.ball.dir = Vec2::new(-1.0, 0.0);
    tick(&mut state, &idle(), 0.05);

    assert_eq!(state.ball.dir, Vec2::new(1.0, 0.0));
    assert_eq!(state.score, 1);
}

#[test]
fn paddle_zones_steer_the_ball() {
    let mut state = playing(GameConfig::default());
    // Paddle spans 288..352 at y 460..470; each zone is 12.8 wide
    let cases = [
        (290.0, Vec2::new(-1.0, -1.0), PaddleZone::FarLeft),
        (305.0, Vec2::new(-1.0, -1.0), PaddleZone::Left),
        (320.0, Vec2::new(0.0, -1.0), PaddleZone::Center),
        (335.0, Vec2::new(1.0, -1.0), PaddleZone::Right),
        (350.0, Vec2::new(1.0, -1.0), PaddleZone::FarRight),
    ];

    for (x, expected_dir, expected_zone) in cases {
        state.drain_events();
        state.ball.pos = Vec2::new(x, 450.0);
        state.ball.dir = Vec2::new(0.0, 1.0);
        tick(&mut state, &idle(), 0.06);
        assert_eq!(state.ball.dir, expected_dir, "x = {x}");
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PaddleHit { zone: expected_zone }]
        );
    }
}

#[test]
fn losing_a_ball_returns_to_standby() {
    let mut state = playing(GameConfig::default());
    state.ball.pos = Vec2::new(100.0, 470.0);
    state.ball.dir = Vec2::new(0.0, 1.0);

    tick(&mut state, &idle(), 0.1);
    assert_eq!(state.phase, GamePhase::Standby);
    assert_eq!(state.lives, 2);

    // Next tick puts the ball back on the paddle
    tick(&mut state, &idle(), 0.1);
    assert_eq!(state.ball.pos.x, state.paddle.center_x());
}

#[test]
fn last_life_lost_resets_session() {
    let mut state = playing(GameConfig::default());
    let full = state.bricks.len();
    state.bricks.remove(0);
    state.bricks.remove(0);
    state.score = 2;
    state.high_score = 2;
    state.lives = 0;

    state.ball.pos = Vec2::new(100.0, 470.0);
    state.ball.dir = Vec2::new(0.0, 1.0);
    tick(&mut state, &idle(), 0.1);

    assert_eq!(state.phase, GamePhase::Standby);
    assert_eq!(state.lives, 3);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 2);
    assert_eq!(state.bricks.len(), full);
    assert!(state.drain_events().contains(&GameEvent::SessionReset));
}

#[test]
fn launch_is_ignored_during_play() {
    let mut state = playing(GameConfig::default());
    state.ball.pos = Vec2::new(200.0, 200.0);
    state.ball.dir = Vec2::new(1.0, 1.0);

    let input = TickInput {
        launch: true,
        ..Default::default()
    };
    tick(&mut state, &input, 0.01);
    assert_eq!(state.ball.dir, Vec2::new(1.0, 1.0));
    assert!(!state.drain_events().contains(&GameEvent::Launched));
}
