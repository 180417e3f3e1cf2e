//! Logical input actions and the per-tick input mapper
//!
//! The host translates raw key events into `Action`s at the boundary, so the
//! simulation never sees platform key codes. Key events only flip held flags;
//! paddles move exclusively inside [`apply_input`] during the tick.

use super::state::GameState;
use crate::consts::*;

/// Logical input actions, one per bound key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::LeftUp,
        Action::LeftDown,
        Action::RightUp,
        Action::RightDown,
    ];

    fn index(self) -> usize {
        match self {
            Action::LeftUp => 0,
            Action::LeftDown => 1,
            Action::RightUp => 2,
            Action::RightDown => 3,
        }
    }
}

/// Instantaneous held/not-held state per action. No event queue: only the
/// state at the moment the tick runs matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }
}

/// Move both paddles from the current held-key state, clamping to the board.
///
/// Down wins over up when both keys for one player are held (first-checked
/// branch, matching reference behavior).
pub fn apply_input(state: &mut GameState, input: &InputState) {
    if input.is_held(Action::LeftDown) {
        state.left.pos.y = (state.left.pos.y + PADDLE_STEP).min(PADDLE_BOTTOM_LIMIT);
    } else if input.is_held(Action::LeftUp) {
        state.left.pos.y = (state.left.pos.y - PADDLE_STEP).max(PADDLE_TOP_LIMIT);
    }

    if input.is_held(Action::RightDown) {
        state.right.pos.y = (state.right.pos.y + PADDLE_STEP).min(PADDLE_BOTTOM_LIMIT);
    } else if input.is_held(Action::RightUp) {
        state.right.pos.y = (state.right.pos.y - PADDLE_STEP).max(PADDLE_TOP_LIMIT);
    }
}
