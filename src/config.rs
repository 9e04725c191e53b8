//! Runtime configuration, read from an optional TOML file.
//!
//! ```toml
//! frame_interval_ms = 16.66
//! seed = 42
//! log_file = "castle_defender.log"
//! log_level = "debug"
//! ```
//!
//! Every key is optional.  Game rules (speeds, wave sizes, the loss
//! threshold) are fixed and not configurable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::FRAME_INTERVAL_MS;
use crate::error::{GameError, Result};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub frame_interval_ms: f64,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frame_interval_ms: FRAME_INTERVAL_MS,
            seed: None,
            log_file: PathBuf::from("castle_defender.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "frame_interval_ms must be positive, got {}",
                self.frame_interval_ms
            )));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros((self.frame_interval_ms * 1000.0).round() as u64)
    }
}
