//! Configuration system for gradeplan.
//!
//! Load planner configuration from TOML or YAML files to tune tolerances,
//! suggestion output and difficulty bands without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use gradeplan_config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     tolerance = 1e-9
//!     suggestion_limit = 5
//!
//!     [bands]
//!     medium_from = 0.25
//!     hard_from = 0.75
//! "#).unwrap();
//!
//! assert_eq!(config.suggestion_limit, 5);
//! assert_eq!(config.bands.hard_from, 0.75);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use gradeplan_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("gradeplan.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use gradeplan_core::BandThresholds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default equality and feasibility tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default number of courses named in fallback suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Default score assumed for extra courses in "add courses" hints.
pub const DEFAULT_ADD_COURSE_SCORE: f64 = 95.0;

/// Main planner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Slack allowed when comparing averages and weighted sums.
    pub tolerance: f64,

    /// How many offending courses infeasible results name.
    pub suggestion_limit: usize,

    /// Difficulty band thresholds used for labeling.
    pub bands: BandThresholds,

    /// Expected score of extra courses proposed to close a gap.
    pub add_course_score: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            bands: BandThresholds::default(),
            add_course_score: DEFAULT_ADD_COURSE_SCORE,
        }
    }
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or holds
    /// values rejected by [`PlannerConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets how many courses fallback suggestions name.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Sets the difficulty band thresholds.
    pub fn with_bands(mut self, bands: BandThresholds) -> Self {
        self.bands = bands;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        if !self.bands.is_ordered() {
            return Err(ConfigError::Invalid(format!(
                "band thresholds must satisfy 0 <= medium_from <= hard_from <= 1, got {} / {}",
                self.bands.medium_from, self.bands.hard_from
            )));
        }
        if !self.add_course_score.is_finite() || !(0.0..=100.0).contains(&self.add_course_score) {
            return Err(ConfigError::Invalid(format!(
                "add_course_score must be within [0, 100], got {}",
                self.add_course_score
            )));
        }
        Ok(())
    }
}
