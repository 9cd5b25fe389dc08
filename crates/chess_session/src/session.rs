//! Session controller: turns board move attempts into timeline commits.
//!
//! The session exclusively owns its [`Timeline`]. Every mutation goes
//! through a method here, and the status is recomputed right after it.

use tracing::{debug, info};

use crate::analysis::AnalysisSnapshot;
use crate::config::{MoveAnchor, SessionConfig};
use crate::engine::PositionEngine;
use crate::error::{MoveRejected, PositionError};
use crate::status::{derive_status, Status};
use crate::timeline::{MoveRecord, Timeline};
use crate::types::{MoveRequest, Square};

pub struct Session<E: PositionEngine> {
    engine: E,
    /// Position every reset returns to
    initial: E::Position,
    timeline: Timeline<E::Position>,
    anchor: MoveAnchor,
    status: Status,
}

impl<E: PositionEngine> Session<E> {
    /// Create a session from config. Fails only if `start_fen` does not load.
    pub fn new(engine: E, config: &SessionConfig) -> Result<Self, PositionError> {
        let initial = match &config.start_fen {
            Some(fen) => engine.load(fen)?,
            None => engine.create_initial(),
        };
        info!(
            start = %engine.serialize(&initial),
            anchor = ?config.move_anchor,
            "session started"
        );
        Ok(Self::from_initial(engine, initial, config.move_anchor))
    }

    /// Standard start position, default move anchor.
    pub fn with_engine(engine: E) -> Self {
        let initial = engine.create_initial();
        Self::from_initial(engine, initial, MoveAnchor::default())
    }

    fn from_initial(engine: E, initial: E::Position, anchor: MoveAnchor) -> Self {
        let status = derive_status(&engine, &initial);
        Self {
            timeline: Timeline::new(initial.clone()),
            engine,
            initial,
            anchor,
            status,
        }
    }

    /// Try to play `from`-`to` (auto-queening). On rejection nothing changes.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveRejected> {
        let request = MoveRequest::new(from, to);
        let anchor = match self.anchor {
            MoveAnchor::Cursor => self.timeline.current_position(),
            MoveAnchor::SnapToHead => self.timeline.live_head(),
        };
        let outcome = match self.engine.try_move(anchor, request) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(%from, %to, %reason, "move rejected");
                return Err(reason);
            }
        };

        if self.anchor == MoveAnchor::SnapToHead {
            self.timeline.seek_head();
        }
        let discarded = self.timeline.head_index() - self.timeline.cursor();
        let record = MoveRecord::new(outcome.san, from, to);
        self.timeline.commit_move(record.clone(), outcome.position);
        self.refresh_status();

        debug!(
            san = %record.san,
            cursor = self.timeline.cursor(),
            discarded,
            status = %self.status,
            "move committed"
        );
        Ok(record)
    }

    /// Board-surface drop handler: `true` to keep the piece where it was
    /// dropped, `false` to snap it back.
    pub fn on_drop_attempt(&mut self, from: &str, to: &str) -> bool {
        let squares = from
            .parse::<Square>()
            .and_then(|from| Ok((from, to.parse::<Square>()?)));
        match squares {
            Ok((from, to)) => self.attempt_move(from, to).is_ok(),
            Err(reason) => {
                debug!(%reason, "move rejected");
                false
            }
        }
    }

    /// Step back one move. `false` at the start of the game.
    pub fn undo(&mut self) -> bool {
        let moved = self.timeline.undo();
        if moved {
            self.refresh_status();
            debug!(cursor = self.timeline.cursor(), head = self.timeline.head_index(), "undo");
        }
        moved
    }

    /// Step forward one move. `false` at the live head.
    pub fn redo(&mut self) -> bool {
        let moved = self.timeline.redo();
        if moved {
            self.refresh_status();
            debug!(cursor = self.timeline.cursor(), head = self.timeline.head_index(), "redo");
        }
        moved
    }

    pub fn reset(&mut self) {
        self.timeline.reset(self.initial.clone());
        self.refresh_status();
        info!("new game");
    }

    fn refresh_status(&mut self) {
        self.status = derive_status(&self.engine, self.timeline.current_position());
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    pub fn can_undo(&self) -> bool {
        self.timeline.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.timeline.can_redo()
    }

    pub fn current_position(&self) -> &E::Position {
        self.timeline.current_position()
    }

    /// Serialized position at the cursor, for rendering.
    pub fn serialized_position(&self) -> String {
        self.engine.serialize(self.timeline.current_position())
    }

    pub fn history_view(&self) -> &[MoveRecord] {
        self.timeline.history_view()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.timeline.last_move()
    }

    pub fn timeline(&self) -> &Timeline<E::Position> {
        &self.timeline
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn analysis_snapshot(&self) -> AnalysisSnapshot {
        AnalysisSnapshot {
            last_move: self.last_move().map(|m| m.san.clone()),
            position: self.serialized_position(),
            move_history: self.history_view().iter().map(|m| m.san.clone()).collect(),
        }
    }
}
