//! Duo Pong - classic two-player Pong on an HTML canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Canvas 2D drawing behind a small `Surface` trait

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval in milliseconds (~60 Hz)
    pub const TICK_MS: u32 = 16;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Horizontal distance from the board edge to each paddle's center
    pub const PADDLE_INSET: f32 = 20.0;
    /// Paddle movement per tick while a key is held
    pub const PADDLE_STEP: f32 = 4.0;
    /// Gap kept between paddle and board edge when clamping
    pub const EDGE_MARGIN: f32 = 5.0;

    /// Vertical clamp limits for the paddle center
    pub const PADDLE_TOP_LIMIT: f32 = PADDLE_HEIGHT / 2.0 + EDGE_MARGIN;
    pub const PADDLE_BOTTOM_LIMIT: f32 = BOARD_HEIGHT - PADDLE_HEIGHT / 2.0 - EDGE_MARGIN;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Speed magnitude right after a serve
    pub const SERVE_SPEED: f32 = 4.0;
    /// Horizontal speed gained on every paddle hit
    pub const PADDLE_SPEED_UP: f32 = 0.5;

    /// Horizontal sub-steps per tick (anti-tunnelling)
    pub const SUBSTEPS: u32 = 20;

    /// Distance past the board edge before a point is awarded
    pub const OUT_MARGIN: f32 = 30.0;
    /// Distance from the top/bottom edge where the ball bounces
    pub const WALL_MARGIN: f32 = 8.0;
}
