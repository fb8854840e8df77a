//! Configuration for the idle face.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::animator::{Behavior, BehaviorError, Profile, Trigger, DEFAULT_TICK_PERIOD};
use crate::display::DEFAULT_ADDRESSES;

/// Main configuration for the idle face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Time between animation ticks
    #[serde(rename = "tick_period_ms", with = "duration_millis")]
    pub tick_period: Duration,

    /// Which display backend to drive
    pub backend: Backend,

    /// Candidate display addresses, tried in order
    pub addresses: Vec<u16>,

    /// Idle triggers
    pub triggers: Vec<Trigger>,

    /// Seed for reproducible idle behavior
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            backend: Backend::Terminal,
            addresses: DEFAULT_ADDRESSES.to_vec(),
            triggers: Behavior::calm().triggers().to_vec(),
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when absent.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("idle-face")
            .join("config.json")
    }

    /// Replace the triggers with a built-in profile.
    pub fn apply_profile(&mut self, profile: Profile) {
        self.triggers = profile.behavior().triggers().to_vec();
    }

    /// Build the idle behavior from the configured triggers.
    pub fn behavior(&self) -> Result<Behavior, BehaviorError> {
        Behavior::from_triggers(self.triggers.iter().copied())
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period.is_zero() {
            return Err(ConfigError::Invalid("tick period must be positive".to_string()));
        }
        if self.addresses.is_empty() {
            return Err(ConfigError::Invalid("at least one display address is required".to_string()));
        }
        self.behavior()?;
        Ok(())
    }
}

/// Display backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Emulated panel drawn on the terminal
    Terminal,
    /// In-memory panel, for running without a terminal
    Headless,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid behavior: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Serde support for Duration as whole milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
