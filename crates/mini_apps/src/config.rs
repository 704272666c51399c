//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration.
///
/// Every section is optional; a missing file yields [`AppConfig::default`].
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Note storage settings.
    notes: NotesConfig,
    /// Log output settings.
    log: LogConfig,
    /// Device position and gazetteer.
    location: LocationConfig,
}

/// `[notes]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// SQLite database path.
    db_path: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            db_path: "mini_apps.db".to_string(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File the terminal UI logs to.
    file: String,
    /// Filter used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: "mini_apps.log".to_string(),
            filter: "info".to_string(),
        }
    }
}

/// `[location]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Device latitude; location is disabled unless both coordinates are set.
    latitude: Option<f64>,
    /// Device longitude.
    longitude: Option<f64>,
    /// Largest distance at which a place still matches.
    max_distance_km: f64,
    /// Known places used for reverse geocoding.
    places: Vec<PlaceConfig>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            max_distance_km: 50.0,
            places: default_places(),
        }
    }
}

/// A named place in the gazetteer.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlaceConfig {
    /// Display name.
    name: String,
    /// Latitude in degrees.
    latitude: f64,
    /// Longitude in degrees.
    longitude: f64,
}

#[instrument]
fn default_places() -> Vec<PlaceConfig> {
    [
        ("Moscow", 55.7558, 37.6173),
        ("Saint Petersburg", 59.9343, 30.3351),
        ("Novosibirsk", 55.0084, 82.9357),
        ("Yekaterinburg", 56.8389, 60.6057),
        ("Kazan", 55.7887, 49.1221),
        ("Nizhny Novgorod", 56.2965, 43.9361),
        ("London", 51.5072, -0.1276),
        ("Berlin", 52.5200, 13.4050),
        ("New York", 40.7128, -74.0060),
        ("San Francisco", 37.7749, -122.4194),
    ]
    .into_iter()
    .map(|(name, lat, lon)| PlaceConfig::new(name.to_string(), lat, lon))
    .collect()
}

impl AppConfig {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or mistyped fields.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the note database path.
    pub fn set_db_path(&mut self, db_path: String) {
        self.notes.db_path = db_path;
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
    /// Creates a new configuration error with caller location tracking.
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
