//! Property tests for geometry, brick layout and scoring

use brick_breaker::GameConfig;
use brick_breaker::sim::{
    Aabb, BrickField, GameEvent, GameState, TickInput, circle_intersects_box, tick,
};
use glam::Vec2;
use proptest::prelude::*;

fn arb_box() -> impl Strategy<Value = Aabb> {
    (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
        .prop_map(|(x, y, w, h)| Aabb::from_min_size(Vec2::new(x, y), Vec2::new(w, h)))
}

fn arb_pos() -> impl Strategy<Value = Vec2> {
    (-800.0f32..800.0, -800.0f32..800.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn mirror_x(b: &Aabb) -> Aabb {
    Aabb::new(Vec2::new(-b.max.x, b.min.y), Vec2::new(-b.min.x, b.max.y))
}

fn mirror_y(b: &Aabb) -> Aabb {
    Aabb::new(Vec2::new(b.min.x, -b.max.y), Vec2::new(b.max.x, -b.min.y))
}

proptest! {
    #[test]
    fn intersection_matches_aabb_arithmetic(pos in arb_pos(), radius in 0.0f32..50.0, b in arb_box()) {
        let expected = pos.x + radius > b.min.x
            && pos.x - radius < b.max.x
            && pos.y + radius > b.min.y
            && pos.y - radius < b.max.y;
        prop_assert_eq!(circle_intersects_box(pos, radius, &b), expected);
    }

    #[test]
    fn intersection_symmetric_under_reflection(pos in arb_pos(), radius in 0.0f32..50.0, b in arb_box()) {
        let hit = circle_intersects_box(pos, radius, &b);
        prop_assert_eq!(hit, circle_intersects_box(Vec2::new(-pos.x, pos.y), radius, &mirror_x(&b)));
        prop_assert_eq!(hit, circle_intersects_box(Vec2::new(pos.x, -pos.y), radius, &mirror_y(&b)));
    }

    #[test]
    fn brick_count_is_rows_times_whole_columns(
        columns in 1u32..20,
        extra in 0.0f32..0.9,
        brick_width in 5.0f32..80.0,
        rows in 1usize..8,
    ) {
        let width = (columns as f32 + extra) * brick_width;
        let rect = Aabb::new(Vec2::ZERO, Vec2::new(width, 400.0));
        let colors: Vec<String> = (0..rows).map(|r| format!("c{r}")).collect();

        let mut field = BrickField::new();
        field.initialize(&rect, brick_width, 10.0, &colors);
        prop_assert_eq!(field.len(), rows * columns as usize);

        // No two bricks share grid coordinates
        let mut corners: Vec<(i64, i64)> = field
            .iter()
            .map(|b| ((b.bounds.min.x * 100.0).round() as i64, (b.bounds.min.y * 100.0).round() as i64))
            .collect();
        corners.sort_unstable();
        corners.dedup();
        prop_assert_eq!(corners.len(), field.len());
    }

    #[test]
    fn high_score_never_decreases(
        steps in prop::collection::vec((0.0f32..0.05, prop::option::of(0.0f32..640.0), any::<bool>()), 1..400),
    ) {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let mut best = state.high_score;
        for (dt, target_x, launch) in steps {
            let input = TickInput { target_x, launch, autopilot: false };
            tick(&mut state, &input, dt);
            prop_assert!(state.high_score >= best);
            prop_assert!(state.high_score >= state.score);
            best = state.high_score;
        }
    }

    #[test]
    fn each_tick_removes_at_most_one_brick(
        steps in prop::collection::vec(0.0f32..0.1, 1..600),
    ) {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let full = state.bricks.len();
        let input = TickInput { autopilot: true, ..Default::default() };
        for dt in steps {
            let (bricks, score) = (state.bricks.len(), state.score);
            tick(&mut state, &input, dt);
            let events = state.drain_events();
            if events.contains(&GameEvent::SessionReset) {
                prop_assert_eq!(state.score, 0);
                prop_assert_eq!(state.bricks.len(), full);
            } else if state.score == score + 1 {
                prop_assert_eq!(state.bricks.len() + 1, bricks);
            } else {
                prop_assert_eq!(state.score, score);
                prop_assert_eq!(state.bricks.len(), bricks);
            }
        }
    }
}
