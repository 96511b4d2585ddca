//! Move selection for the AI player.

use crate::encoded::CELLS;
use crate::position::Position;
use crate::rules;
use crate::search::search;
use crate::types::{Board, Player};

/// Minimax value of each empty cell for `side` to move.
///
/// Occupied cells are `None`. Each candidate is scored one ply below the
/// root, with the opponent to reply. All cells are `None` on a decided
/// board.
pub fn score_moves(board: &Board, side: Player) -> [Option<i32>; CELLS] {
    let mut scores = [None; CELLS];
    let state = board.encode();
    if rules::outcome(&state).is_some() {
        return scores;
    }
    for index in state.empty_cells() {
        scores[index] = Some(search(state.with_mark(index, side), side.opponent(), 1));
    }
    scores
}

/// Best move for `side`, or `None` on a full or decided board.
///
/// The AI takes the highest score and the human the lowest. Ties go to
/// the first cell in row-major order.
pub fn best_move(board: &Board, side: Player) -> Option<Position> {
    let mut best: Option<(usize, i32)> = None;
    for (index, score) in score_moves(board, side).into_iter().enumerate() {
        let Some(score) = score else { continue };
        let improves = match best {
            None => true,
            Some((_, current)) if side == Player::AI => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((index, score));
        }
    }
    best.and_then(|(index, _)| Position::from_index(index))
}

/// The AI's move on `board`.
pub fn choose_move(board: &Board) -> Option<Position> {
    best_move(board, Player::AI)
}

/// Chooses the AI's move and applies it.
///
/// Returns the position played, or `None` if there was nothing to play;
/// the board is then unchanged.
pub fn play_turn(board: &mut Board) -> Option<Position> {
    let pos = choose_move(board)?;
    board.place(pos, Player::AI).ok()?;
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoded::EncodedState;

    fn board(s: &str) -> Board {
        s.parse::<EncodedState>().unwrap().decode()
    }

    #[test]
    fn test_takes_immediate_win() {
        assert_eq!(choose_move(&board("020020000")), Some(Position::BottomCenter));
    }

    #[test]
    fn test_blocks_human_line() {
        assert_eq!(choose_move(&board("110020000")), Some(Position::TopRight));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X X _ / O O _ / X _ _: O can win at 5 or block at 2.
        assert_eq!(choose_move(&board("110220100")), Some(Position::MiddleRight));
    }

    #[test]
    fn test_empty_board_opens_top_left() {
        assert_eq!(choose_move(&Board::new()), Some(Position::TopLeft));
    }

    #[test]
    fn test_no_move_on_decided_board() {
        assert_eq!(choose_move(&board("111220000")), None);
        assert_eq!(choose_move(&board("121211212")), None);
        assert_eq!(score_moves(&board("111220000"), Player::AI), [None; CELLS]);
    }

    #[test]
    fn test_play_turn_applies_move() {
        let mut b = board("020020000");
        assert_eq!(play_turn(&mut b), Some(Position::BottomCenter));
        assert_eq!(b.encode().to_string(), "020020020");
        assert_eq!(b.winner(), Some(Player::O));
    }

    #[test]
    fn test_play_turn_on_full_board_is_noop() {
        let mut b = board("121211212");
        let before = b;
        assert_eq!(play_turn(&mut b), None);
        assert_eq!(b, before);
    }

    #[test]
    fn test_human_hint_blocks_ai() {
        // O threatens the middle column; the human reply must take 7.
        assert_eq!(
            best_move(&board("120020001"), Player::HUMAN),
            Some(Position::BottomCenter)
        );
    }

    #[test]
    fn test_scores_skip_occupied_cells() {
        let scores = score_moves(&board("020020000"), Player::AI);
        assert_eq!(scores[1], None);
        assert_eq!(scores[4], None);
        assert_eq!(scores[7], Some(9));
        assert!(scores.iter().flatten().all(|&s| s <= 9));
    }
}
