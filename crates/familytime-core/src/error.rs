//! Core error types for familytime-core.
//!
//! The estimate itself cannot fail; these cover input validation,
//! configuration and the I/O around them.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for familytime-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Family or config file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Errors in user-entered family data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Parent birth year is required")]
    MissingParentBirthYear,

    /// Birth year is not an integer
    #[error("Invalid birth year '{0}': expected a whole year such as 2021")]
    InvalidBirthYear(String),

    #[error("Birth year {year} out of range: must be after {min} and no later than {max}")]
    BirthYearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Invalid daycare {field} age '{value}': expected a non-negative number")]
    InvalidDaycareAge { field: &'static str, value: String },

    #[error("Daycare start age {start} must be below end age {end}")]
    DaycareRangeInverted { start: f64, end: f64 },

    #[error("Invalid parental leave duration '{0}': expected a non-negative number of years")]
    InvalidLeaveDuration(String),

    #[error("Unknown parent type '{0}'")]
    UnknownParentType(String),
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
