//! Error types for the core library.

use thiserror::Error;

use crate::store::{StoreError, StoreKey};

/// Errors returned by session operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid snapshot for '{key}': {source}")]
    Serialization {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Profile or log input that is missing or out of range.
///
/// The message is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Weight loss timeline must be at least 1 week")]
    WeeksTooFew,

    #[error("Target weight must be below your current weight to lose weight.")]
    TargetNotBelowCurrent,

    /// The requested weight-loss timeline is too fast.
    #[error("{message}")]
    Pace {
        message: String,
        adjusted_weeks: u32,
    },

    #[error("Water amount must be a positive number of liters (got {0})")]
    WaterAmount(f64),

    #[error("No profile has been created yet")]
    NoProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Missing("Name").to_string(), "Name is required");
        assert_eq!(
            ValidationError::NotPositive {
                field: "Weight",
                value: -3.0
            }
            .to_string(),
            "Weight must be greater than zero (got -3)"
        );
    }

    #[test]
    fn test_error_wraps_validation_transparently() {
        let err: Error = ValidationError::WeeksTooFew.into();
        assert_eq!(
            err.to_string(),
            "Weight loss timeline must be at least 1 week"
        );
        assert!(matches!(err, Error::Validation(_)));
    }
}
