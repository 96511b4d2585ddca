//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s, mutated only by placement and reset
//! - **Encoding**: the canonical 9-character [`EncodedState`] (`'0'` empty,
//!   `'1'` X, `'2'` O) shared by persistence and search
//! - **Rules**: win and draw detection over the eight [`WINNING_LINES`]
//! - **Search**: exhaustive minimax from the AI's point of view
//! - **AI**: picks the first best-scoring move and applies it
//!
//! Nothing in this crate performs I/O or logs; sessions, save files and
//! the game log live with the caller.
//!
//! # Example
//!
//! ```
//! use tictac_core::{Board, Player, Position, choose_move};
//!
//! let mut board = Board::new();
//! board.place(Position::TopLeft, Player::X).unwrap();
//! board.place(Position::TopCenter, Player::X).unwrap();
//! // O must block the top row.
//! assert_eq!(choose_move(&board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod encoded;
mod position;
pub mod rules;
mod search;
mod types;

pub use ai::{best_move, choose_move, play_turn, score_moves};
pub use encoded::{CELLS, DecodeError, EncodedState, decode, encode};
pub use position::Position;
pub use rules::{Outcome, WINNING_LINES, is_draw, is_full, outcome, winner};
pub use search::{WIN_SCORE, count_nodes, search};
pub use types::{Board, PlaceError, Player, Square};
