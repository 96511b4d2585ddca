//! Win detection logic for tic-tac-toe.

use crate::encoded::EncodedState;
use crate::types::Player;

/// The eight winning lines as row-major cell indices.
///
/// Rows first, then columns, then the two diagonals. [`winner`] reports
/// the first complete line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first line whose three
/// cells hold the same mark, `None` otherwise. States that could not
/// arise in play (both players with a line) still get a deterministic
/// answer.
pub fn winner(state: &EncodedState) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let owner = state.owner(a)?;
        (state.owner(b) == Some(owner) && state.owner(c) == Some(owner)).then_some(owner)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> EncodedState {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&EncodedState::INITIAL), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&state("111220000")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&state("120120200")), None);
        assert_eq!(winner(&state("021021120")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&state("210120000")), None);
        assert_eq!(winner(&state("201120102")), Some(Player::O));
        assert_eq!(winner(&state("221010100")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&state("110000000")), None);
        assert_eq!(winner(&state("112000000")), None);
    }

    #[test]
    fn test_first_line_wins_on_unreachable_state() {
        // O fills the middle row, X the top row; rows are scanned top-down.
        assert_eq!(winner(&state("111222000")), Some(Player::X));
        assert_eq!(winner(&state("222111000")), Some(Player::O));
    }
}
