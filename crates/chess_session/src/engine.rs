//! Position engine seam.
//!
//! The session never looks inside a position. Legality, move application
//! and game-termination facts all come from a [`PositionEngine`].

use std::fmt;

use crate::error::{MoveRejected, PositionError};
use crate::types::{MoveRequest, Side};

/// A confirmed move as reported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome<P> {
    /// Standard Algebraic Notation of the move
    pub san: String,
    /// Position after the move
    pub position: P,
}

/// Trait implemented by rules engines the session can drive.
///
/// Positions are immutable snapshots; `try_move` returns a new one and
/// never touches its input.
pub trait PositionEngine {
    type Position: Clone + fmt::Debug;

    /// Standard starting position.
    fn create_initial(&self) -> Self::Position;

    /// Parse a serialized position produced by [`PositionEngine::serialize`].
    fn load(&self, serialized: &str) -> Result<Self::Position, PositionError>;

    /// Validate and apply a move.
    ///
    /// # Arguments
    /// * `position` - Position the move is played from
    /// * `request` - Source, target and promotion piece
    ///
    /// # Returns
    /// The SAN of the move and the resulting position, or why it was refused
    fn try_move(
        &self,
        position: &Self::Position,
        request: MoveRequest,
    ) -> Result<MoveOutcome<Self::Position>, MoveRejected>;

    fn is_game_over(&self, position: &Self::Position) -> bool;

    fn is_checkmate(&self, position: &Self::Position) -> bool;

    fn is_draw(&self, position: &Self::Position) -> bool;

    fn is_check(&self, position: &Self::Position) -> bool;

    fn side_to_move(&self, position: &Self::Position) -> Side;

    /// Serialized form. Two positions are equal iff their serialized forms are.
    fn serialize(&self, position: &Self::Position) -> String;
}
