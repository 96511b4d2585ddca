//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::encoded::EncodedState;
use crate::position::Position;
use crate::rules;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X, the human (goes first).
    X,
    /// Player O, the AI.
    O,
}

impl Player {
    /// The side the search maximizes for.
    pub const AI: Player = Player::O;
    /// The side the search minimizes for.
    pub const HUMAN: Player = Player::X;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Digit used for this player's mark in an encoded state.
    pub fn to_digit(self) -> u8 {
        match self {
            Player::X => b'1',
            Player::O => b'2',
        }
    }

    /// Player owning the mark `digit`, if it is one.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'1' => Some(Player::X),
            b'2' => Some(Player::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Digit used for this square in an encoded state.
    pub fn to_digit(self) -> u8 {
        match self {
            Square::Empty => b'0',
            Square::Occupied(player) => player.to_digit(),
        }
    }
}

/// Error returned when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for PlaceError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `player`'s mark at `pos`.
    ///
    /// Turn order is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if the square already holds a
    /// mark; the board is left unchanged.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Empty positions, in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Canonical 9-character encoding of this board.
    pub fn encode(&self) -> EncodedState {
        EncodedState::from(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(&self.encode())
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.encode())
    }

    /// Full board with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.encode())
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their cell index so the output doubles as a
    /// move reference.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
