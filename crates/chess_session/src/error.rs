//! Error types for the chess session.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Square;

/// Why a move attempt was refused. Absorbed by the session controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    /// Square name could not be parsed.
    #[error("malformed square: {0:?}")]
    MalformedSquare(String),

    /// No piece of the side to move stands on the source square.
    #[error("no piece to move on {0}")]
    NoPieceToMove(Square),

    /// Rules engine refused the move.
    #[error("illegal move {from}{to}")]
    Illegal { from: Square, to: Square },
}

/// A serialized position the engine could not load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// Configuration could not be read or parsed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
