//! Fixed-interval simulation tick
//!
//! One tick = input mapping, then the ball physics step. The host timer is
//! the only caller; nothing else mutates simulation state.

use super::geom::rects_overlap;
use super::input::{InputState, apply_input};
use super::state::{GameState, Side};
use crate::consts::*;

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &InputState) {
    apply_input(state, input);
    step_ball(state);
    state.time_ticks += 1;
}

/// Ball physics: sub-stepped horizontal motion with paddle bounces, then
/// scoring, then a single vertical step with wall bounces. The order is
/// load-bearing: scoring runs only after all sub-steps have resolved.
fn step_ball(state: &mut GameState) {
    // Split the horizontal displacement into sub-steps so a fast ball
    // cannot tunnel through a paddle within one tick.
    let mut step = state.ball.vel.x / SUBSTEPS as f32;
    for _ in 0..SUBSTEPS {
        state.ball.pos.x += step;
        let ball_rect = state.ball.rect();
        if state.ball.vel.x < 0.0 && rects_overlap(&ball_rect, &state.left.rect()) {
            // Reflect, then speed up. vx is positive after the reflection,
            // so adding the boost grows the magnitude.
            state.ball.vel.x = -state.ball.vel.x + PADDLE_SPEED_UP;
            step = state.ball.vel.x / SUBSTEPS as f32;
        } else if state.ball.vel.x > 0.0 && rects_overlap(&ball_rect, &state.right.rect()) {
            state.ball.vel.x = -state.ball.vel.x - PADDLE_SPEED_UP;
            step = state.ball.vel.x / SUBSTEPS as f32;
        }
    }

    // At most one side can be out of bounds per tick
    if state.ball.pos.x > BOARD_WIDTH + OUT_MARGIN {
        state.score_point(Side::Left);
    } else if state.ball.pos.x < -OUT_MARGIN {
        state.score_point(Side::Right);
    }

    // Vertical motion: pure reflection at the wall margins, no position
    // correction (the ball may overlap a wall for under one tick).
    state.ball.pos.y += state.ball.vel.y;
    if state.ball.pos.y < WALL_MARGIN || state.ball.pos.y > BOARD_HEIGHT - WALL_MARGIN {
        state.ball.vel.y = -state.ball.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn quiet_ball(state: &mut GameState) {
        // Park the ball where it cannot interfere with the scenario
        state.ball.pos = Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0);
        state.ball.vel = Vec2::ZERO;
    }

    #[test]
    fn test_left_paddle_bounce_flips_and_speeds_up() {
        let mut state = GameState::new(11);
        state.ball.pos = state.left.pos;
        state.ball.vel = Vec2::new(-3.0, 0.0);

        tick(&mut state, &InputState::default());

        assert_eq!(state.ball.vel.x, 3.5);
        // First sub-step at -0.15, remaining 19 at the new +0.175 increment
        let expected_x = state.left.pos.x - 0.15 + 19.0 * 0.175;
        assert!((state.ball.pos.x - expected_x).abs() < 1e-3);
    }

    #[test]
    fn test_right_paddle_bounce_is_symmetric() {
        let mut state = GameState::new(11);
        state.ball.pos = state.right.pos;
        state.ball.vel = Vec2::new(3.0, 0.0);

        tick(&mut state, &InputState::default());

        assert_eq!(state.ball.vel.x, -3.5);
    }

    #[test]
    fn test_no_bounce_when_moving_away() {
        // Overlapping the left paddle but moving right: no hit
        let mut state = GameState::new(11);
        state.ball.pos = state.left.pos;
        state.ball.vel = Vec2::new(2.0, 0.0);

        tick(&mut state, &InputState::default());

        assert_eq!(state.ball.vel.x, 2.0);
    }

    #[test]
    fn test_fast_ball_does_not_tunnel_through_paddle() {
        // 40 units/tick is twice the paddle width; sub-stepping must still
        // catch the crossing.
        let mut state = GameState::new(11);
        state.ball.pos = Vec2::new(state.right.pos.x - 10.0, state.right.pos.y);
        state.ball.vel = Vec2::new(40.0, 0.0);

        tick(&mut state, &InputState::default());

        assert_eq!(state.ball.vel.x, -40.5);
    }

    #[test]
    fn test_top_wall_bounce_reflects_without_clamp() {
        let mut state = GameState::new(11);
        state.ball.pos = Vec2::new(BOARD_WIDTH / 2.0, 9.0);
        state.ball.vel = Vec2::new(0.0, -2.0);

        tick(&mut state, &InputState::default());

        assert_eq!(state.ball.pos.y, 7.0);
        assert_eq!(state.ball.vel.y, 2.0);
        // Speed unchanged at wall bounces
        assert_eq!(state.ball.speed(), 2.0);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = GameState::new(11);
        state.ball.pos = Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT - 9.0);
        state.ball.vel = Vec2::new(0.0, 3.0);

        tick(&mut state, &InputState::default());

        assert_eq!(state.ball.pos.y, BOARD_HEIGHT - 6.0);
        assert_eq!(state.ball.vel.y, -3.0);
    }

    #[test]
    fn test_ball_past_right_edge_scores_for_left() {
        let mut state = GameState::new(11);
        state.ball.pos = Vec2::new(BOARD_WIDTH + 31.0, 200.0);
        state.ball.vel = Vec2::ZERO;
        // Displace a paddle to confirm positions reset on score
        state.left.pos.y = PADDLE_TOP_LIMIT;

        tick(&mut state, &InputState::default());

        assert_eq!(state.left.score, 1);
        assert_eq!(state.right.score, 0);
        // The vertical step still runs after the serve, so y has already
        // moved by one tick's vy; x is untouched until the next tick.
        assert_eq!(state.ball.pos.x, BOARD_WIDTH / 2.0);
        assert!((state.ball.pos.y - BOARD_HEIGHT / 2.0).abs() <= SERVE_SPEED);
        assert!((state.ball.speed() - SERVE_SPEED).abs() < 1e-4);
        assert_eq!(state.left.pos.y, BOARD_HEIGHT / 2.0);
    }

    #[test]
    fn test_ball_past_left_edge_scores_for_right() {
        let mut state = GameState::new(11);
        state.ball.pos = Vec2::new(-31.0, 200.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &InputState::default());

        assert_eq!(state.right.score, 1);
        assert_eq!(state.left.score, 0);
    }

    #[test]
    fn test_ball_inside_margin_does_not_score() {
        let mut state = GameState::new(11);
        state.ball.pos = Vec2::new(BOARD_WIDTH + 29.0, 200.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &InputState::default());

        assert_eq!(state.left.score, 0);
        assert_eq!(state.ball.pos.x, BOARD_WIDTH + 29.0);
    }

    #[test]
    fn test_input_applied_before_physics() {
        let mut state = GameState::new(11);
        quiet_ball(&mut state);
        let mut input = InputState::default();
        input.set(crate::sim::Action::LeftUp, true);
        let y = state.left.pos.y;

        tick(&mut state, &input);

        assert_eq!(state.left.pos.y, y - PADDLE_STEP);
    }

    #[test]
    fn test_determinism_across_runs() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        let mut input = InputState::default();
        input.set(crate::sim::Action::RightDown, true);

        for _ in 0..500 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(a.left.score, b.left.score);
        assert_eq!(a.right.score, b.right.score);
        assert_eq!(a.right.pos.y, b.right.pos.y);
    }

    #[test]
    fn test_long_run_stays_sane() {
        let mut state = GameState::new(3);
        for _ in 0..5000 {
            tick(&mut state, &InputState::default());
            assert!(state.ball.pos.is_finite());
            assert!(state.ball.vel.is_finite());
        }
    }
}
