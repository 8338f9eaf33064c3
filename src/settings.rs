//! User settings for the terminal views.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Order in which the history list is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }
}

/// Settings loaded from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Order of the history list.
    history_order: HistoryOrder,

    /// Append "(row, col)" of each move to its history label.
    show_locations: bool,

    /// Where the TUI writes its log.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_order: HistoryOrder::default(),
            show_locations: true,
            log_file: PathBuf::from("tictactoe_timeline.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(history_order = %settings.history_order, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy with a different history order.
    pub fn with_history_order(mut self, order: HistoryOrder) -> Self {
        self.history_order = order;
        self
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
