//! Application settings loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ConfigError;
use crate::view::MoveOrder;

/// Default location of the settings file.
pub const DEFAULT_CONFIG_PATH: &str = "timetoe.toml";

/// User settings.
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File the TUI writes its log to.
    log_file: PathBuf,

    /// `tracing` filter directive, overridden by `RUST_LOG`.
    log_filter: String,

    /// Initial order of the move list.
    move_order: MoveOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("timetoe.log"),
            log_filter: "info".to_string(),
            move_order: MoveOrder::default(),
        }
    }
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;

        info!(move_order = ?settings.move_order, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks values serde cannot.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::new("log_filter must not be empty"));
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::new("log_file must not be empty"));
        }
        Ok(())
    }

    /// Returns these settings with a different move order.
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
    }
}
