//! Game session and turn management.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tictac_core::{Board, EncodedState, Outcome, PlaceError, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl From<Option<Outcome>> for GameStatus {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => GameStatus::InProgress,
            Some(Outcome::Winner(player)) => GameStatus::Won(player),
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Error that can occur when playing a turn.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The other side is to move.
    #[display("It's {}'s turn", to_move)]
    NotYourTurn {
        /// The side whose turn it is.
        to_move: Player,
    },

    /// The placement was refused by the board.
    #[display("{}", _0)]
    #[from]
    Place(PlaceError),
}

/// A human-vs-AI game: X is the human and moves first, O is the AI.
///
/// The session owns the board; callers hold the session value and pass
/// it wherever a turn is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
}

impl GameSession {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Resumes a game from an encoded state.
    #[instrument(skip_all, fields(state = %state))]
    pub fn from_state(state: EncodedState) -> Self {
        let mut session = Self {
            board: Board::new(),
            status: GameStatus::InProgress,
        };
        session.load_state(state);
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Encoded form of the current board.
    pub fn state(&self) -> EncodedState {
        self.board.encode()
    }

    /// Side to move.
    ///
    /// X moves on even turn numbers, where the turn number is the count
    /// of marks on the board.
    pub fn to_move(&self) -> Player {
        let placed = self.board.count(Player::X) + self.board.count(Player::O);
        if placed % 2 == 0 { Player::X } else { Player::O }
    }

    /// Places the human's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Refuses the move, leaving the board unchanged, when the game is
    /// over, when the AI is to move, or when the square is taken.
    #[instrument(skip(self), fields(state = %self.state()))]
    pub fn place_human(&mut self, pos: Position) -> Result<GameStatus, SessionError> {
        self.ensure_turn(Player::HUMAN)?;
        self.board.place(pos, Player::HUMAN).inspect_err(|e| {
            warn!(error = %e, "Invalid move attempted");
        })?;
        info!(position = %pos, "Player made a move");
        Ok(self.end_turn())
    }

    /// Plays the AI's turn.
    ///
    /// Returns the position played, or `None` when there is nothing to
    /// play.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotYourTurn`] when the human is to move.
    #[instrument(skip(self), fields(state = %self.state()))]
    pub fn play_ai(&mut self) -> Result<Option<Position>, SessionError> {
        if self.status.is_over() {
            debug!("Game already decided, AI passes");
            return Ok(None);
        }
        self.ensure_turn(Player::AI)?;

        let played = tictac_core::play_turn(&mut self.board);
        if let Some(pos) = played {
            info!(position = %pos, "AI made a move");
            self.end_turn();
        }
        Ok(played)
    }

    /// Plays the AI's pending move, if it is the AI's turn.
    ///
    /// A game loaded with an odd number of marks has O to move; this
    /// brings it back to the human. Returns the position played, or
    /// `None` when the game is over or X is to move.
    #[instrument(skip(self), fields(state = %self.state()))]
    pub fn resume(&mut self) -> Option<Position> {
        if self.status.is_over() || self.to_move() != Player::AI {
            return None;
        }
        let played = tictac_core::play_turn(&mut self.board);
        if let Some(pos) = played {
            info!(position = %pos, "AI made its pending move");
            self.end_turn();
        }
        played
    }

    /// Best move for the human, if the game is open.
    #[instrument(skip(self), fields(state = %self.state()))]
    pub fn hint(&self) -> Option<Position> {
        if self.status.is_over() || self.to_move() != Player::HUMAN {
            return None;
        }
        tictac_core::best_move(&self.board, Player::HUMAN)
    }

    /// Clears the board and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        info!("Game reset");
    }

    /// Replaces the board with `state` and recomputes status and turn.
    #[instrument(skip_all, fields(state = %state))]
    pub fn load_state(&mut self, state: EncodedState) {
        self.board = state.decode();
        self.status = GameStatus::from(tictac_core::outcome(&state));
        info!(status = %self.status, to_move = %self.to_move(), "Loaded game state");
    }

    fn ensure_turn(&self, player: Player) -> Result<(), SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver);
        }
        let to_move = self.to_move();
        if to_move != player {
            return Err(SessionError::NotYourTurn { to_move });
        }
        Ok(())
    }

    /// Re-evaluates status after a placement.
    fn end_turn(&mut self) -> GameStatus {
        self.status = GameStatus::from(tictac_core::outcome(&self.state()));
        match self.status {
            GameStatus::Won(player) => info!(winner = %player, "Winner detected"),
            GameStatus::Draw => warn!("Draw detected"),
            GameStatus::InProgress => debug!(to_move = %self.to_move(), "Turn ended"),
        }
        self.status
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_moves_first() {
        let session = GameSession::new();
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new();
        session.place_human(Position::Center).unwrap();
        assert_eq!(session.to_move(), Player::O);
        assert_eq!(
            session.place_human(Position::TopLeft),
            Err(SessionError::NotYourTurn { to_move: Player::O })
        );
        assert!(session.play_ai().unwrap().is_some());
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_square_leaves_board_unchanged() {
        let mut session = GameSession::new();
        session.place_human(Position::Center).unwrap();
        session.play_ai().unwrap();
        let before = session.clone();

        let err = session.place_human(Position::Center).unwrap_err();
        assert_eq!(err, SessionError::Place(PlaceError::SquareOccupied(Position::Center)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_ai_refuses_out_of_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.play_ai(),
            Err(SessionError::NotYourTurn { to_move: Player::X })
        );
    }

    #[test]
    fn test_reset_returns_to_in_progress() {
        let mut session = GameSession::from_state("111220000".parse().unwrap());
        assert_eq!(session.status(), GameStatus::Won(Player::X));
        session.reset();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.state(), EncodedState::INITIAL);
    }

    #[test]
    fn test_resume_only_acts_on_ai_turn() {
        let mut session = GameSession::new();
        assert_eq!(session.resume(), None);
        assert_eq!(session.state(), EncodedState::INITIAL);

        let mut won = GameSession::from_state("111220000".parse().unwrap());
        assert_eq!(won.to_move(), Player::O);
        assert_eq!(won.resume(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SessionError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            SessionError::NotYourTurn { to_move: Player::O }.to_string(),
            "It's O's turn"
        );
    }
}
