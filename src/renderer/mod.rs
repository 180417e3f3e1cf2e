//! Rendering module
//!
//! `draw_frame` maps a read-only snapshot of the game state to draw calls on
//! a `Surface`. The canvas-backed surface is wasm-only; tests use a recording
//! surface, so the mapping itself is platform-free.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

const BACKGROUND_COLOR: &str = "#101010";
const PADDLE_COLOR: &str = "#e8e8e8";
const BALL_COLOR: &str = "#e8e8e8";
const NET_COLOR: &str = "#505050";
const SCORE_COLOR: &str = "#909090";

/// Minimal 2D drawing surface: filled rects, filled circles, text.
///
/// Draw calls never feed back into the simulation.
pub trait Surface {
    fn fill_rect(&mut self, color: &str, center: Vec2, width: f32, height: f32);
    fn fill_circle(&mut self, color: &str, center: Vec2, radius: f32);
    fn draw_text(&mut self, color: &str, text: &str, pos: Vec2);
}

/// Draw one frame: background, net, paddles, ball, scores.
pub fn draw_frame(state: &GameState, surface: &mut impl Surface) {
    surface.fill_rect(
        BACKGROUND_COLOR,
        Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0),
        BOARD_WIDTH,
        BOARD_HEIGHT,
    );

    draw_net(surface);

    for paddle in [&state.left, &state.right] {
        surface.fill_rect(PADDLE_COLOR, paddle.pos, PADDLE_WIDTH, PADDLE_HEIGHT);
    }

    surface.fill_circle(BALL_COLOR, state.ball.pos, BALL_RADIUS);

    surface.draw_text(
        SCORE_COLOR,
        &state.left.score.to_string(),
        Vec2::new(BOARD_WIDTH / 4.0, 40.0),
    );
    surface.draw_text(
        SCORE_COLOR,
        &state.right.score.to_string(),
        Vec2::new(3.0 * BOARD_WIDTH / 4.0, 40.0),
    );
}

/// Dashed center line
fn draw_net(surface: &mut impl Surface) {
    let mut y = 10.0;
    while y < BOARD_HEIGHT {
        surface.fill_rect(NET_COLOR, Vec2::new(BOARD_WIDTH / 2.0, y), 4.0, 10.0);
        y += 20.0;
    }
}
