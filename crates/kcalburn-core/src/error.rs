//! Core error types for kcalburn-core.
//!
//! Input validation failures carry messages meant to be shown to the user
//! as-is; everything else is regular error plumbing built on thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kcalburn-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// User input rejected before calculation
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Activity catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Invalid calculator input.
///
/// The `Display` text is the inline message for the input form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Calorie field left blank
    #[error("Please enter a calorie amount.")]
    MissingCalories,

    /// Calorie value is not a positive finite number
    #[error("Calories must be a number greater than 0.")]
    InvalidCalories,

    /// Body weight supplied but not a positive finite number
    #[error("Body weight must be a valid positive number.")]
    InvalidWeight,
}

/// Activity catalog errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("activity key must not be empty")]
    EmptyKey,

    #[error("duplicate activity key: {0}")]
    DuplicateKey(String),

    #[error("activity '{key}' has invalid intensity {mets}; METs must be greater than 0")]
    InvalidIntensity { key: String, mets: f64 },

    #[error("unknown activity: {0}")]
    UnknownActivity(String),
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

    /// Key does not exist in the config tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No usable config directory
    #[error("Cannot determine config directory")]
    NoConfigDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_display_as_user_messages() {
        assert_eq!(
            InputError::MissingCalories.to_string(),
            "Please enter a calorie amount."
        );
        assert_eq!(
            InputError::InvalidWeight.to_string(),
            "Body weight must be a valid positive number."
        );
    }

    #[test]
    fn core_error_is_transparent_for_input() {
        let err: CoreError = InputError::InvalidCalories.into();
        assert_eq!(err.to_string(), "Calories must be a number greater than 0.");
    }
}
