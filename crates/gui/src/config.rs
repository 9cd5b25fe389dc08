//! GUI configuration, read once at startup

use chess_session::{ConfigError, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Smallest board edge in pixels
    pub min_width: f32,
    /// Largest board edge in pixels
    pub max_width: f32,
    /// Black at the bottom
    pub flipped: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_width: 240.0,
            max_width: 720.0,
            flipped: false,
            window_width: 1100.0,
            window_height: 760.0,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
