//! `geograph` Configuration Module
//!
//! Provides configuration file support via `geograph.toml` and environment
//! variables.
//!
//! # Priority (highest to lowest)
//!
//! 1. Environment variables (`GEOGRAPH_*`, nested keys split on `__`)
//! 2. Configuration file (`geograph.toml`)
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::distance::{DistanceMethod, EARTH_RADIUS_KM};
use crate::geo::AxisOrder;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// CSV ingestion section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Field delimiter.
    pub delimiter: char,
    /// Whether the first row holds column names.
    /// Without a header, columns are named `col_0`, `col_1`, ...
    pub has_header: bool,
    /// Column holding the node label.
    pub label_column: String,
    /// Column holding a combined coordinate pair.
    pub coords_column: String,
    /// Split coordinate columns; the third is optional.
    pub coord_columns: Vec<String>,
    /// Latitude column.
    pub lat_column: String,
    /// Longitude column.
    pub long_column: String,
    /// How split / combined coordinates map onto longitude and latitude.
    pub axis_order: AxisOrder,
    /// Keep non-coordinate columns as node properties.
    pub keep_extra_columns: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            label_column: "label".to_string(),
            coords_column: "coords".to_string(),
            coord_columns: vec![
                "coord1".to_string(),
                "coord2".to_string(),
                "coord3".to_string(),
            ],
            lat_column: "lat".to_string(),
            long_column: "long".to_string(),
            axis_order: AxisOrder::LonLat,
            keep_extra_columns: true,
        }
    }
}

impl IngestConfig {
    /// Returns the delimiter as the single byte the CSV reader expects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-ASCII delimiter.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "ingest.delimiter".to_string(),
                message: format!("'{}' is not an ASCII character", self.delimiter),
            })
    }
}

/// Distance section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Great-circle formula.
    pub method: DistanceMethod,
    /// Sphere radius; edge weights are in this unit.
    pub earth_radius_km: f64,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            method: DistanceMethod::SphericalLawOfCosines,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

/// Main `geograph` configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeoGraphConfig {
    /// Ingestion configuration.
    pub ingest: IngestConfig,
    /// Distance configuration.
    pub distance: DistanceConfig,
}

impl GeoGraphConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("geograph.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("GEOGRAPH_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.distance.earth_radius_km;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "distance.earth_radius_km".to_string(),
                message: format!("value {radius} must be a positive finite number"),
            });
        }

        self.ingest.delimiter_byte()?;

        if !(2..=3).contains(&self.ingest.coord_columns.len()) {
            return Err(ConfigError::InvalidValue {
                key: "ingest.coord_columns".to_string(),
                message: format!(
                    "expected 2 or 3 column names, got {}",
                    self.ingest.coord_columns.len()
                ),
            });
        }

        let named = [
            ("ingest.label_column", &self.ingest.label_column),
            ("ingest.coords_column", &self.ingest.coords_column),
            ("ingest.lat_column", &self.ingest.lat_column),
            ("ingest.long_column", &self.ingest.long_column),
        ];
        for (key, value) in named
            .into_iter()
            .chain(self.ingest.coord_columns.iter().map(|c| ("ingest.coord_columns", c)))
        {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "column name must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
