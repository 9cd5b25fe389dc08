//! Linear move timeline with an undo/redo cursor.
//!
//! `positions[0]` is the start position and `positions[i]` follows from
//! `moves[i - 1]`. The cursor indexes `positions`; a commit away from the
//! head discards everything after the cursor first, so there is only ever
//! one branch.

use serde::Serialize;
use std::fmt;

use crate::types::Square;

/// A confirmed move with SAN notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// Standard Algebraic Notation representation
    pub san: String,
    /// Squares as submitted, for last-move highlighting
    pub from: Square,
    pub to: Square,
}

impl MoveRecord {
    pub fn new(san: impl Into<String>, from: Square, to: Square) -> Self {
        Self {
            san: san.into(),
            from,
            to,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san)
    }
}

#[derive(Debug, Clone)]
pub struct Timeline<P> {
    positions: Vec<P>,
    moves: Vec<MoveRecord>,
    cursor: usize,
}

impl<P> Timeline<P> {
    pub fn new(initial: P) -> Self {
        Self {
            positions: vec![initial],
            moves: Vec::new(),
            cursor: 0,
        }
    }

    /// Start over from `initial`, dropping every move.
    pub fn reset(&mut self, initial: P) {
        *self = Self::new(initial);
    }

    /// Append a move after the cursor, discarding any redo branch.
    pub fn commit_move(&mut self, record: MoveRecord, position: P) {
        self.positions.truncate(self.cursor + 1);
        self.moves.truncate(self.cursor);
        self.positions.push(position);
        self.moves.push(record);
        self.cursor += 1;
    }

    /// Step back one move. Returns `false` at the start.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one move. Returns `false` at the head.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor to the live head. Returns `false` if already there.
    pub fn seek_head(&mut self) -> bool {
        let moved = self.cursor != self.head_index();
        self.cursor = self.head_index();
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.head_index()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the live head, `N`.
    pub fn head_index(&self) -> usize {
        self.moves.len()
    }

    pub fn is_live(&self) -> bool {
        self.cursor == self.head_index()
    }

    pub fn current_position(&self) -> &P {
        &self.positions[self.cursor]
    }

    pub fn live_head(&self) -> &P {
        &self.positions[self.head_index()]
    }

    /// Moves in effect at the cursor.
    pub fn history_view(&self) -> &[MoveRecord] {
        &self.moves[..self.cursor]
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history_view().last()
    }

    pub fn positions(&self) -> &[P] {
        &self.positions
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
