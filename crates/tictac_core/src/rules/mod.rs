//! Game rules for tic-tac-toe.
//!
//! Pure functions over the encoded state. The search engine calls these
//! at every node, so they neither allocate nor log.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, winner};

use serde::{Deserialize, Serialize};

use crate::encoded::EncodedState;
use crate::types::Player;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Outcome of `state`, or `None` while the game is still open.
///
/// A win takes precedence over a full board.
pub fn outcome(state: &EncodedState) -> Option<Outcome> {
    if let Some(player) = winner(state) {
        Some(Outcome::Winner(player))
    } else if is_full(state) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> EncodedState {
        s.parse().unwrap()
    }

    #[test]
    fn test_open_game_has_no_outcome() {
        assert_eq!(outcome(&EncodedState::INITIAL), None);
        assert_eq!(outcome(&state("120000000")), None);
    }

    #[test]
    fn test_win_beats_full_board() {
        // X O X / O X O / X O X: X holds both diagonals
        assert_eq!(
            outcome(&state("121212121")),
            Some(Outcome::Winner(Player::X))
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        assert_eq!(outcome(&state("121122211")), Some(Outcome::Draw));
    }
}
