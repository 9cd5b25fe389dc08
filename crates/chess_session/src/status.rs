//! User-facing game status, derived from a position.

use std::fmt;

use crate::engine::PositionEngine;
use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Checkmate { winner: Side },
    Drawn,
    /// Terminal for some other reason the engine reports
    GameOver,
    Check { to_move: Side },
    ToMove(Side),
}

impl Status {
    pub fn is_over(self) -> bool {
        matches!(self, Status::Checkmate { .. } | Status::Drawn | Status::GameOver)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Checkmate { winner } => write!(f, "Checkmate! {winner} wins!"),
            Status::Drawn => write!(f, "Game drawn!"),
            Status::GameOver => write!(f, "Game over!"),
            Status::Check { to_move } => write!(f, "Check! {to_move} to move"),
            Status::ToMove(side) => write!(f, "{side} to move"),
        }
    }
}

/// First match wins: mate, draw, other terminal, check, plain turn.
pub fn derive_status<E: PositionEngine>(engine: &E, position: &E::Position) -> Status {
    let to_move = engine.side_to_move(position);

    if engine.is_game_over(position) {
        if engine.is_checkmate(position) {
            Status::Checkmate {
                winner: to_move.other(),
            }
        } else if engine.is_draw(position) {
            Status::Drawn
        } else {
            Status::GameOver
        }
    } else if engine.is_check(position) {
        Status::Check { to_move }
    } else {
        Status::ToMove(to_move)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
