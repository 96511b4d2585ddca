//! Save and load of the board as a bare 9-character state.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use tictac_core::{CELLS, DecodeError, EncodedState};
use tracing::{debug, info, instrument, warn};

use crate::session::GameSession;

/// Default save file, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "tictactoe_save.txt";

/// Save file error.
#[derive(Debug, Display, Error)]
pub enum SaveError {
    /// The save file could not be read or written.
    #[display("Failed to access save file {}: {}", path, source)]
    Io {
        /// Path of the save file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file did not hold a 9-character state.
    #[display("Save file did not contain a valid 9-character state (found {} characters)", _0)]
    InvalidLength(#[error(not(source))] usize),

    /// The state held characters other than `0`, `1`, `2`.
    #[display("Save file is corrupt: {}", _0)]
    Corrupt(DecodeError),
}

impl SaveError {
    /// Returns true if the save file does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, SaveError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A flat file holding one encoded state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Creates a handle for the save file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the save file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `state`, replacing any previous save.
    #[instrument(skip(self), fields(path = %self.path.display(), state = %state))]
    pub fn write(&self, state: &EncodedState) -> Result<(), SaveError> {
        std::fs::write(&self.path, state.to_string()).map_err(|source| self.io_error(source))?;
        info!("Saved game state");
        Ok(())
    }

    /// Reads the saved state.
    ///
    /// Only the first whitespace-delimited token is considered.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::InvalidLength`] unless that token is exactly
    /// nine characters, and [`SaveError::Corrupt`] for characters outside
    /// the encoding.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<EncodedState, SaveError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let token = content.split_whitespace().next().unwrap_or_default();
        if token.chars().count() != CELLS {
            return Err(SaveError::InvalidLength(token.chars().count()));
        }

        let state = token.parse().map_err(SaveError::Corrupt)?;
        debug!(state = %state, "Read saved state");
        Ok(state)
    }

    /// Resumes the saved game, or starts a fresh one when there is no
    /// usable save.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_session(&self) -> GameSession {
        match self.read() {
            Ok(state) => GameSession::from_state(state),
            Err(e) if e.is_missing() => {
                debug!("No save file, starting fresh");
                GameSession::new()
            }
            Err(e) => {
                warn!(error = %e, "Discarding invalid save");
                GameSession::new()
            }
        }
    }

    fn io_error(&self, source: std::io::Error) -> SaveError {
        SaveError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Default for SaveFile {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}
