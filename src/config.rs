//! Game configuration
//!
//! Loaded from `config.ron` in the platform config directory. Every field is
//! optional in the file; anything missing falls back to the defaults below.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::CellWeights;

/// What entering a vendor or cave does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckpointMode {
    /// Trade with the vendor, brave the cave
    #[default]
    Interact,
    /// Regenerate the whole map and send the player back to the start
    Regenerate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub starting_hp: i32,
    /// Pause after every action, in milliseconds
    pub frame_delay_ms: u64,
    /// How quickly a reaction check must be answered
    pub reaction_window_ms: u64,
    /// HP lost for a slow reaction
    pub reaction_penalty: i32,
    /// Odds that pushing on a wall reveals a secret door
    pub secret_door_chance: f64,
    pub checkpoint: CheckpointMode,
    /// Fixed RNG seed for reproducible maps
    pub seed: Option<u64>,
    pub weights: CellWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            starting_hp: 10,
            frame_delay_ms: 100,
            reaction_window_ms: 1500,
            reaction_penalty: 2,
            secret_door_chance: 0.25,
            checkpoint: CheckpointMode::Interact,
            seed: None,
            weights: CellWeights::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl GameConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file is not an error and yields `None`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Self::from_ron_str(&source).map(Some)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 2 || self.height < 2 {
            return Err(ConfigError::Invalid(format!(
                "map must be at least 2x2, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > 200 || self.height > 200 {
            return Err(ConfigError::Invalid(format!(
                "map must be at most 200x200, got {}x{}",
                self.width, self.height
            )));
        }
        if self.starting_hp < 1 {
            return Err(ConfigError::Invalid("starting_hp must be positive".into()));
        }
        if self.reaction_penalty < 0 {
            return Err(ConfigError::Invalid("reaction_penalty must not be negative".into()));
        }
        if !(0.0..=1.0).contains(&self.secret_door_chance) {
            return Err(ConfigError::Invalid(format!(
                "secret_door_chance must be within 0..=1, got {}",
                self.secret_door_chance
            )));
        }
        if self.weights.total() == 0 {
            return Err(ConfigError::Invalid("cell weights must not all be zero".into()));
        }
        Ok(())
    }
}

/// Location of the config file
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "gridquest", "Gridquest") {
        proj_dirs.config_dir().join("config.ron")
    } else {
        PathBuf::from("./config.ron")
    }
}

/// Load the config, falling back to defaults when it is missing or broken
pub fn load_config() -> GameConfig {
    let path = config_path();
    match GameConfig::load(&path) {
        Ok(Some(config)) => {
            log::info!("Config loaded from {:?}", path);
            config
        }
        Ok(None) => {
            log::info!("No config at {:?}, using defaults", path);
            GameConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring config at {:?}: {}", path, e);
            GameConfig::default()
        }
    }
}
