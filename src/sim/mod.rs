//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod geom;
pub mod input;
pub mod state;
pub mod tick;

pub use geom::{Rect, rects_overlap};
pub use input::{Action, InputState, apply_input};
pub use state::{Ball, GameState, Paddle, Side};
pub use tick::tick;
