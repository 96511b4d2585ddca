//! Command-line tic-tac-toe against an exhaustive minimax AI.
//!
//! # Architecture
//!
//! - **Session**: owns the board, enforces turn order, tracks win/draw
//! - **Save**: persists the board as its 9-character state between commands
//! - **Config**: `tictac.toml` settings for the save file and game log
//! - **Analysis**: per-cell scores and self-play reports
//!
//! Game rules and the search live in [`tictac_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
pub mod logging;
mod save;
mod session;

pub use analysis::{Analysis, SelfPlay, self_play};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE};
pub use save::{DEFAULT_SAVE_PATH, SaveError, SaveFile};
pub use session::{GameSession, GameStatus, SessionError};
