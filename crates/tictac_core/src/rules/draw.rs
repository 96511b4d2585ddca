//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::encoded::EncodedState;

/// Checks if the board is full (all squares occupied).
pub fn is_full(state: &EncodedState) -> bool {
    state.empty_cells().next().is_none()
}

/// A full board with no winner.
///
/// A full board that also completes a line is a win, not a draw.
pub fn is_draw(state: &EncodedState) -> bool {
    winner(state).is_none() && is_full(state)
}
