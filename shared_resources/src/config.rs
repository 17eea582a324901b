use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::error::ConfigError;
use super::index_base::IndexBase;

pub const CONFIG_FILE: &str = "config.json";
pub const FALLBACK_CONFIG_FILE: &str = "_config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct BuildingConfig {
    pub num_floors: usize,
    pub num_elevators: usize,
    pub elevator_capacity: u32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SelectorConfig {
    #[serde(default)]
    pub index_base: IndexBase,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub ticks: u64,
    pub tick_interval_ms: u64,
    pub spawn_probability: f64,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub selector: SelectorConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Reads `config.json`, falling back to the checked-in `_config.json`.
    pub fn get() -> Result<Self, ConfigError> {
        if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)
        } else {
            warn!("No configuration file provided, using default settings...");
            Self::from_file(FALLBACK_CONFIG_FILE)
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.num_floors == 0 {
            return Err(ConfigError::Invalid("num_floors must be at least 1".into()));
        }
        if self.building.num_elevators == 0 {
            return Err(ConfigError::Invalid("num_elevators must be at least 1".into()));
        }
        if self.building.elevator_capacity == 0 {
            return Err(ConfigError::Invalid("elevator_capacity must be at least 1".into()));
        }
        let p = self.simulation.spawn_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "spawn_probability {} is outside [0, 1]",
                p
            )));
        }
        Ok(())
    }
}
