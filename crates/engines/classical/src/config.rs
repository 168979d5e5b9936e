//! Engine configuration.
//!
//! One struct drives every variant of the engine: the feature toggles the
//! search honours and the thresholds the depth controller uses. Values can
//! be loaded from TOML; missing keys fall back to the defaults below.
//!
//! ```toml
//! [search]
//! move_ordering = true
//! use_pst = true
//! # fixed_ply = 4
//!
//! [time]
//! panic_ms = 1000
//! endgame_pieces = 5
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub time: TimeConfig,
}

/// Feature toggles for the search itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Sort moves before searching them (off = generator order)
    pub move_ordering: bool,
    /// Add piece-square bonuses to the material count
    pub use_pst: bool,
    /// Search exactly this many plies instead of asking the clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_ply: Option<u8>,
    /// Exchange depth to pair with `fixed_ply` (unbounded if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_exchange_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            move_ordering: true,
            use_pst: true,
            fixed_ply: None,
            fixed_exchange_depth: None,
        }
    }
}

/// Thresholds used to turn the clock into a depth budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeConfig {
    /// Below this, search one ply with no exchange search
    pub panic_ms: u64,
    /// Below this, two plies
    pub low_ms: u64,
    /// Below this, three plies
    pub moderate_ms: u64,
    /// Game plies counted as the opening
    pub opening_plies: u32,
    /// Depth with ample time during the opening
    pub opening_ply: u8,
    /// Depth with ample time after the opening
    pub full_ply: u8,
    /// At or below this many pieces on the board the endgame depth applies
    pub endgame_pieces: u32,
    pub endgame_ply: u8,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            panic_ms: 1_000,
            low_ms: 5_000,
            moderate_ms: 20_000,
            opening_plies: 16,
            opening_ply: 4,
            full_ply: 5,
            endgame_pieces: 5,
            endgame_ply: 10,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.time;
        if !(t.panic_ms <= t.low_ms && t.low_ms <= t.moderate_ms) {
            return Err(ConfigError::Invalid(format!(
                "time thresholds must be ordered: panic_ms ({}) <= low_ms ({}) <= moderate_ms ({})",
                t.panic_ms, t.low_ms, t.moderate_ms
            )));
        }
        if t.opening_ply == 0 || t.full_ply == 0 || t.endgame_ply == 0 {
            return Err(ConfigError::Invalid("search depths must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
