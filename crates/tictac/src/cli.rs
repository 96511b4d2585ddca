//! Command-line interface for tictac.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictac_core::Player;

/// Tic-tac-toe against an AI that never loses
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = tictac::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game, discarding the saved one
    New,

    /// Show the saved game
    Show,

    /// Play a move as X; the AI answers as O
    Move {
        /// Cell index (0-8, row-major) or label such as "center"
        position: String,
    },

    /// Suggest the best move for X
    Hint,

    /// Score every empty cell of a 9-character state
    Analyze {
        /// Encoded state, e.g. 102020001
        state: String,

        /// Side to move
        #[arg(long, value_enum, default_value_t = Side::O)]
        turn: Side,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play the AI against an optimal opponent
    Selfplay {
        /// Let the AI move first
        #[arg(long)]
        ai_first: bool,
    },
}

/// Side selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// The human, X
    X,
    /// The AI, O
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
