//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geom::Rect;
use crate::consts::*;

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Center position in board coordinates
    pub pos: Vec2,
    pub score: u32,
}

impl Paddle {
    fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, BOARD_HEIGHT / 2.0),
            score: 0,
        }
    }

    /// Collision rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Re-center vertically after a point. Score is untouched.
    pub fn reset_position(&mut self) {
        self.pos.y = BOARD_HEIGHT / 2.0;
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Square bounding box of side `BALL_RADIUS * 2` used for collision.
    /// The ball is drawn as a circle but collides as its box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, BALL_RADIUS * 2.0, BALL_RADIUS * 2.0)
    }

    /// Current speed magnitude
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Complete game state, owned by the tick handler. No globals.
#[derive(Debug, Clone)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with both paddles centered and the ball served
    /// from the middle in a random direction.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            left: Paddle::new(PADDLE_INSET),
            right: Paddle::new(BOARD_WIDTH - PADDLE_INSET),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.serve();
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Serve: ball to board center with speed `SERVE_SPEED` in a uniformly
    /// random direction. Called at game start and after every score.
    pub fn serve(&mut self) {
        let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
        self.ball.pos = Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0);
        self.ball.vel = Vec2::new(SERVE_SPEED * angle.cos(), SERVE_SPEED * angle.sin());
    }

    /// Award a point, re-center both paddles (scores are kept) and re-serve
    pub fn score_point(&mut self, side: Side) {
        self.paddle_mut(side).score += 1;
        self.left.reset_position();
        self.right.reset_position();
        log::info!(
            "point for {:?}, score {} - {}",
            side,
            self.left.score,
            self.right.score
        );
        self.serve();
    }
}
