//! Exhaustive minimax search over the 3x3 game tree.
//!
//! Scores are always from the AI's point of view: the AI ([`Player::AI`])
//! maximizes and the human ([`Player::HUMAN`]) minimizes. A decided game
//! scores `10 - depth` in magnitude, so quicker wins and slower losses are
//! preferred; a draw scores zero.
//!
//! The tree is at most nine plies deep and small enough that the search
//! runs without pruning or a transposition table. Each branch receives
//! its own copy of the state, so there is nothing to undo.

use crate::encoded::EncodedState;
use crate::rules::{is_full, winner};
use crate::types::Player;

/// Magnitude of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Minimax value of `state` with `turn` to move, `depth` plies below the
/// root of the search.
///
/// Pure: identical arguments always give the identical score. Callers
/// start at depth 1 for a child of the current position. A win found
/// deeper than [`WIN_SCORE`] plies still scores 1, keeping its sign.
pub fn search(state: EncodedState, turn: Player, depth: u8) -> i32 {
    if let Some(player) = winner(&state) {
        let score = (WIN_SCORE - i32::from(depth)).max(1);
        return if player == Player::AI { score } else { -score };
    }
    if is_full(&state) {
        return 0;
    }

    let children = state
        .empty_cells()
        .map(|index| search(state.with_mark(index, turn), turn.opponent(), depth.saturating_add(1)));

    let best = if turn == Player::AI {
        children.max()
    } else {
        children.min()
    };
    // Not full, so at least one child exists.
    best.unwrap_or(0)
}

/// Number of nodes the exhaustive search visits from `state`, the root
/// included.
pub fn count_nodes(state: EncodedState, turn: Player) -> u64 {
    if winner(&state).is_some() || is_full(&state) {
        return 1;
    }
    1 + state
        .empty_cells()
        .map(|index| count_nodes(state.with_mark(index, turn), turn.opponent()))
        .sum::<u64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> EncodedState {
        s.parse().unwrap()
    }

    #[test]
    fn test_ai_win_scores_positive() {
        // O completes the middle column
        assert_eq!(search(state("121020120"), Player::X, 1), 9);
        assert_eq!(search(state("121020120"), Player::X, 5), 5);
    }

    #[test]
    fn test_human_win_scores_negative() {
        assert_eq!(search(state("111220000"), Player::O, 2), -8);
    }

    #[test]
    fn test_draw_scores_zero() {
        assert_eq!(search(state("121211212"), Player::X, 9), 0);
    }

    #[test]
    fn test_win_checked_before_full_board() {
        // X X X / O O X / O X O is full but won by X
        assert_eq!(search(state("111221212"), Player::O, 9), -1);
    }

    #[test]
    fn test_forced_reply() {
        // X X _ / O O _ / X O _ with O to move: 5 wins at once.
        assert_eq!(search(state("110220120"), Player::O, 0), 9);
        // With X to move, X takes 2 and wins.
        assert_eq!(search(state("110220120"), Player::X, 0), -9);
    }

    #[test]
    fn test_deep_depth_keeps_sign() {
        assert_eq!(search(state("020020020"), Player::X, 12), 1);
        assert_eq!(search(state("111220000"), Player::O, u8::MAX), -1);
        assert_eq!(search(EncodedState::INITIAL, Player::X, 250), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(search(EncodedState::INITIAL, Player::X, 0), 0);
    }

    #[test]
    fn test_count_nodes_terminal_and_last_move() {
        assert_eq!(count_nodes(state("111220000"), Player::O), 1);
        // One empty cell: the root and its single child.
        assert_eq!(count_nodes(state("121211210"), Player::O), 2);
    }

    #[test]
    fn test_count_nodes_full_tree() {
        // Known size of the complete tic-tac-toe game tree.
        assert_eq!(count_nodes(EncodedState::INITIAL, Player::X), 549_946);
    }
}
