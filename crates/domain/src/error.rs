//! Common error types used across the workspace.
//!
//! Each failure class gets its own typed error; [`HelioDashError`] is the
//! workspace-wide umbrella with `#[from]` conversions. No `String` variants.

use crate::time::ProductionDate;

/// Umbrella error for the heliodash workspace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HelioDashError {
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    #[error("Invalid date range")]
    InvalidRange(#[from] InvalidRangeError),

    #[error("Invalid argument")]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error("Data unavailable")]
    DataUnavailable(#[from] DataUnavailableError),
}

/// A domain invariant was violated while constructing or mutating a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("station id must not be empty")]
    EmptyStationId,
    #[error("station name must not be empty")]
    EmptyName,
    #[error("capacity must not be negative")]
    NegativeCapacity,
    #[error("production must not be negative")]
    NegativeProduction,
    #[error("date bound minimum must not exceed its maximum")]
    InvertedBound,
}

/// A custom period where the start date lies after the end date.
///
/// Rejected before any fetch is issued; no partial state mutation occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid range: start {start} is after end {end}")]
pub struct InvalidRangeError {
    pub start: ProductionDate,
    pub end: ProductionDate,
}

/// A caller broke a documented contract (e.g. a zero-day window).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid argument: {reason}")]
pub struct InvalidArgumentError {
    pub reason: &'static str,
}

/// A fetch collaborator failed (network or decode).
///
/// Recoverable: the controller keeps the last good chart rendered and the
/// next user action retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("data unavailable: {message}")]
pub struct DataUnavailableError {
    pub message: String,
}

impl DataUnavailableError {
    /// Wrap a transport or decode failure message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn should_convert_validation_error_into_umbrella() {
        let err: HelioDashError = ValidationError::EmptyStationId.into();
        assert!(matches!(
            err,
            HelioDashError::Validation(ValidationError::EmptyStationId)
        ));
    }

    #[test]
    fn should_render_invalid_range_with_both_dates() {
        let err = InvalidRangeError {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let text = err.to_string();
        assert!(text.contains("2024-03-10"));
        assert!(text.contains("2024-03-01"));
    }

    #[test]
    fn should_keep_message_when_wrapping_data_unavailable() {
        let err = DataUnavailableError::new("HTTP 502");
        assert_eq!(err.to_string(), "data unavailable: HTTP 502");
    }
}
