//! Headless Driver Configuration
//!
//! Settings for the simulation binary. Game rules are fixed in
//! [`crate::core::board`]; this only controls how a run is driven.
//!
//! Loaded from a JSON file; every field is optional:
//!
//! ```json
//! {
//!   "seed": 2024,
//!   "frames": 3600,
//!   "frame_dt": 0.0166667,
//!   "starting_lives": 1,
//!   "report_interval": 600,
//!   "log_level": "info",
//!   "input_script": "runs/crossing.json"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::game::input::{InputEvent, InputLog};
use crate::game::world::DEFAULT_STARTING_LIVES;
use crate::TICK_RATE;

/// Simulation driver configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// RNG seed for the world.
    pub seed: u64,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Seconds per frame.
    pub frame_dt: f32,
    /// Lives the player starts with.
    pub starting_lives: u32,
    /// Log a progress line every this many frames (0 disables).
    pub report_interval: u32,
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Optional JSON file with recorded key presses.
    pub input_script: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            frames: TICK_RATE * 60,
            frame_dt: 1.0 / TICK_RATE as f32,
            starting_lives: DEFAULT_STARTING_LIVES,
            report_interval: TICK_RATE * 10,
            log_level: "info".to_string(),
            input_script: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON for the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// Path that failed
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl SimConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: SimConfig = read_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "frame_dt must be a positive number of seconds, got {}",
                self.frame_dt
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        Ok(())
    }

    /// Load the recorded key presses, or an empty log when none is set.
    ///
    /// The script is a JSON array of `{"frame": n, "direction": "up"}`.
    pub fn load_input_script(&self) -> Result<InputLog, ConfigError> {
        match &self.input_script {
            Some(path) => {
                let events: Vec<InputEvent> = read_json(path)?;
                Ok(InputLog::from_events(events))
            }
            None => Ok(InputLog::new()),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
