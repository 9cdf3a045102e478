//! Screen configuration loaded from TOML.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use tracing::{debug, info, instrument};

/// Timing and layout settings for the game screen.
///
/// Every key is optional in the file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ScreenConfig {
    /// Duration of every transition, in milliseconds.
    animation_ms: u64,

    /// Delay before the square-field correction runs, in milliseconds.
    layout_delay_ms: u64,

    /// Interval between animation frames, in milliseconds.
    tick_ms: u64,

    /// Height-to-width ratio of one terminal character cell.
    cell_aspect: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            animation_ms: 300,
            layout_delay_ms: 100,
            tick_ms: 16,
            cell_aspect: 2.0,
        }
    }
}

impl ScreenConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be at least 1"));
        }
        if !(self.cell_aspect.is_finite() && self.cell_aspect > 0.0) {
            return Err(ConfigError::new("cell_aspect must be a positive number"));
        }
        Ok(())
    }

    /// Transition duration.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Delay before the field layout is adjusted.
    pub fn layout_delay(&self) -> Duration {
        Duration::from_millis(self.layout_delay_ms)
    }

    /// Frame interval.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScreenConfig::load_or_default(dir.path().join("none.toml")).unwrap();
        assert_eq!(config, ScreenConfig::default());
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        std::fs::write(&path, "animation_ms = 120\n").unwrap();

        let config = ScreenConfig::from_file(&path).unwrap();
        assert_eq!(*config.animation_ms(), 120);
        assert_eq!(*config.layout_delay_ms(), 100);
        assert_eq!(*config.cell_aspect(), 2.0);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        std::fs::write(&path, "animation_ms = \"slow\"\n").unwrap();
        let err = ScreenConfig::from_file(&path).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        std::fs::write(&path, "tick_ms = 0\n").unwrap();
        assert!(ScreenConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_setters_chain() {
        let config = ScreenConfig::default()
            .with_animation_ms(0)
            .with_layout_delay_ms(5);
        assert_eq!(config.animation_duration(), Duration::ZERO);
        assert_eq!(config.layout_delay(), Duration::from_millis(5));
    }
}
