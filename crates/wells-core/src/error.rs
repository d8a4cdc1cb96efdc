//! Error types for wells operations.
//!
//! The simulation itself is closed and numeric, so errors are either
//! configuration mistakes caught at construction or logic errors that
//! should be unreachable with a well-formed action model.

use crate::types::ActionId;
use thiserror::Error;

/// Result type for wells operations.
pub type Result<T> = std::result::Result<T, WellsError>;

/// Errors that can occur during wells operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WellsError {
    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// An action that is not part of the action model.
    #[error("Unknown action: {0}")]
    UnknownAction(ActionId),

    /// A contemplating agent tried to contemplate.
    #[error("Nested contemplation: a contemplating agent cannot contemplate")]
    NestedContemplation,

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for WellsError {
    fn from(e: std::io::Error) -> Self {
        WellsError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for WellsError {
    fn from(e: serde_json::Error) -> Self {
        WellsError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    /// The action model has no wells.
    #[error("Action model must contain at least one well")]
    EmptyActionModel,

    /// Two wells share a name.
    #[error("Duplicate well name: {0}")]
    DuplicateWell(String),
}

// Convenience constructors
impl WellsError {
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WellsError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        WellsError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}

/// Check that `value` lies in the closed unit interval.
pub(crate) fn check_unit(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(WellsError::out_of_range(field, 0.0, 1.0, value))
    }
}
