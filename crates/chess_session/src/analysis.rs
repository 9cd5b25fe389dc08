//! Read-only projection handed to an analysis collaborator after each commit.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSnapshot {
    /// SAN of the last move in effect at the cursor
    pub last_move: Option<String>,
    /// Serialized position at the cursor
    pub position: String,
    /// SAN of every move in effect at the cursor
    pub move_history: Vec<String>,
}

impl AnalysisSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
