//! Full games played through the session.

use tictac::{GameSession, GameStatus, SessionError};
use tictac_core::{EncodedState, Player, Position};

fn state(s: &str) -> EncodedState {
    s.parse().unwrap()
}

#[test]
fn test_ai_completes_its_line() {
    // X X _ / O O _ / X _ _ with O to move.
    let mut session = GameSession::from_state(state("110220100"));
    assert_eq!(session.to_move(), Player::O);
    assert_eq!(session.play_ai().unwrap(), Some(Position::MiddleRight));
    assert_eq!(session.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_ai_answers_corner_then_blocks() {
    let mut session = GameSession::new();
    session.place_human(Position::TopLeft).unwrap();
    // Only the center holds the draw against a corner opening.
    assert_eq!(session.play_ai().unwrap(), Some(Position::Center));

    session.place_human(Position::TopCenter).unwrap();
    assert_eq!(session.play_ai().unwrap(), Some(Position::TopRight));
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_optimal_human_draws() {
    let mut session = GameSession::new();
    while !session.status().is_over() {
        let pos = session.hint().expect("open game has a hint");
        session.place_human(pos).unwrap();
        session.play_ai().unwrap();
    }
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut session = GameSession::from_state(state("111220000"));
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    assert_eq!(
        session.place_human(Position::BottomRight),
        Err(SessionError::GameOver)
    );
    assert_eq!(session.play_ai(), Ok(None));
    assert_eq!(session.hint(), None);
    assert_eq!(session.state(), state("111220000"));
}

#[test]
fn test_full_board_with_line_is_a_win() {
    let session = GameSession::from_state(state("111221212"));
    assert_eq!(session.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let session = GameSession::from_state(state("121211212"));
    assert_eq!(session.status(), GameStatus::Draw);
}
