//! User-configurable settings, optionally loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console session.
///
/// Every field has a default, so a settings file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Print warnings in red.
    color: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[setters(into)]
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or returns the defaults when no path is given.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(color = settings.color, log_filter = %settings.log_filter, "Settings loaded");
        Ok(settings)
    }
}

/// A settings file that could not be read or parsed, tagged with where in
/// this crate the failure was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("settings error: {message} ({origin})")]
pub struct ConfigError {
    /// What went wrong.
    pub message: String,
    /// Call site that raised the error.
    pub origin: &'static std::panic::Location<'static>,
}

impl ConfigError {
    #[track_caller]
    fn new(message: String) -> Self {
        Self {
            message,
            origin: std::panic::Location::caller(),
        }
    }
}
