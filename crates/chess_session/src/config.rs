//! Session configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Which position a new move attempt is played against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAnchor {
    /// Play against the displayed position and commit at the cursor.
    /// Undone moves past the cursor are discarded.
    #[default]
    Cursor,
    /// Play against the live head and jump the cursor there before
    /// committing. Undone moves are redone, never discarded.
    SnapToHead,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub move_anchor: MoveAnchor,
    /// Serialized start position; standard start when absent
    pub start_fen: Option<String>,
}

impl SessionConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
