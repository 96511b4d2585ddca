//! Canonical 9-character board encoding.
//!
//! One byte per cell in row-major order: `'0'` empty, `'1'` for X and
//! `'2'` for O. The encoding is the interchange form between the board,
//! the search engine and the save file.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// Number of cells on the board.
pub const CELLS: usize = 9;

const EMPTY: u8 = b'0';

/// Error decoding an encoded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DecodeError {
    /// Input was not exactly nine bytes long.
    #[display("Encoded state must be 9 characters, got {}", _0)]
    WrongLength(usize),

    /// Input held a byte outside `'0'`, `'1'`, `'2'`.
    #[display("Invalid character {:?} at index {}", found, index)]
    InvalidCharacter {
        /// Cell index of the offending byte.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl std::error::Error for DecodeError {}

/// A well-formed encoded state.
///
/// Values are only produced by encoding a board or by the validating
/// parser, so every `EncodedState` has length nine and a legal alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EncodedState([u8; CELLS]);

impl EncodedState {
    /// The all-empty state, `"000000000"`.
    pub const INITIAL: EncodedState = EncodedState([EMPTY; CELLS]);

    /// Raw cell bytes.
    pub fn as_bytes(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Whether the cell at `index` is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.0[index] == EMPTY
    }

    /// Owner of the cell at `index`.
    pub fn owner(&self, index: usize) -> Option<Player> {
        Player::from_digit(self.0[index])
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&i| self.is_empty_at(i))
    }

    /// Copy of this state with `player`'s mark at `index`.
    ///
    /// Callers only pass empty cells.
    pub fn with_mark(self, index: usize, player: Player) -> Self {
        let mut cells = self.0;
        cells[index] = player.to_digit();
        Self(cells)
    }

    /// Rebuilds the board this state encodes.
    pub fn decode(&self) -> Board {
        let mut squares = [Square::Empty; CELLS];
        for (square, &digit) in squares.iter_mut().zip(self.0.iter()) {
            if let Some(player) = Player::from_digit(digit) {
                *square = Square::Occupied(player);
            }
        }
        Board::from_squares(squares)
    }
}

impl Default for EncodedState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<&Board> for EncodedState {
    fn from(board: &Board) -> Self {
        let mut cells = [EMPTY; CELLS];
        for pos in Position::ALL {
            cells[pos.to_index()] = board.get(pos).to_digit();
        }
        Self(cells)
    }
}

impl From<EncodedState> for Board {
    fn from(state: EncodedState) -> Self {
        state.decode()
    }
}

impl FromStr for EncodedState {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != CELLS {
            return Err(DecodeError::WrongLength(s.len()));
        }

        let mut cells = [EMPTY; CELLS];
        for (index, c) in s.chars().enumerate() {
            match c {
                '0' | '1' | '2' => cells[index] = c as u8,
                found => return Err(DecodeError::InvalidCharacter { index, found }),
            }
        }
        Ok(Self(cells))
    }
}

impl TryFrom<String> for EncodedState {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EncodedState> for String {
    fn from(state: EncodedState) -> Self {
        state.to_string()
    }
}

impl std::fmt::Display for EncodedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &byte in &self.0 {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}

/// Encodes `board` into its canonical state.
pub fn encode(board: &Board) -> EncodedState {
    EncodedState::from(board)
}

/// Decodes a state back into a board.
pub fn decode(state: EncodedState) -> Board {
    state.decode()
}
