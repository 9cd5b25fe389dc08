//! Single-game chess session.
//!
//! A [`Session`] keeps a linear [`Timeline`] of positions with an undo/redo
//! cursor, submits board move attempts to a [`PositionEngine`], and derives
//! a human-readable [`Status`] after every change. [`StandardRules`] is the
//! shipped engine.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
mod san;
pub mod session;
pub mod status;
pub mod timeline;
pub mod types;

pub use analysis::AnalysisSnapshot;
pub use config::{MoveAnchor, SessionConfig};
pub use engine::{MoveOutcome, PositionEngine};
pub use error::{ConfigError, MoveRejected, PositionError};
pub use rules::{Position, StandardRules};
pub use session::Session;
pub use status::{derive_status, Status};
pub use timeline::{MoveRecord, Timeline};
pub use types::*;

/// Session over standard chess rules.
pub type ChessSession = Session<StandardRules>;
