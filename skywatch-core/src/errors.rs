//! Error types for the ephemeris engine.
//!
//! A single unified error type [`EphemError`] covers the failure modes the
//! engine reports: a bad sampling range, an out-of-bounds observing
//! coordinate, a catalog lookup that resolved to nothing, and non-finite
//! intermediate values inside a model.
//!
//! All errors are reported synchronously to the immediate caller and none
//! are retried internally — the computation is deterministic, so retrying
//! changes nothing. A failed call never returns a partial result.
//!
//! ```
//! use skywatch_core::{EphemError, EphemResult};
//!
//! fn check_step(step_minutes: u32) -> EphemResult<()> {
//!     if step_minutes == 0 {
//!         return Err(EphemError::invalid_range("step must be positive"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Which observing coordinate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    /// Latitude magnitude must lie in [0°, 90°].
    Latitude,
    /// Longitude magnitude must lie in [0°, 180°].
    Longitude,
}

/// Which catalog failed to resolve a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Planet,
    Star,
}

/// Unified error type for ephemeris computation.
#[derive(Error, Debug)]
pub enum EphemError {
    /// Sampling range rejected before any record was produced
    /// (start after end, or a non-positive step).
    #[error("Invalid sampling range: {message}")]
    InvalidRange { message: String },

    /// Latitude or longitude magnitude out of bounds when constructing a
    /// `Place`.
    #[error("Invalid {kind:?} {value}: {message}")]
    InvalidCoordinate {
        kind: CoordinateKind,
        value: f64,
        message: String,
    },

    /// A catalog lookup yielded no result and the caller proceeded anyway.
    #[error("Unresolvable {kind:?}: no catalog entry for {name:?}")]
    UnresolvableBody { kind: BodyKind, name: String },

    /// A model produced a non-finite intermediate value.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, EphemError>`.
pub type EphemResult<T> = Result<T, EphemError>;

impl EphemError {
    /// Creates an [`InvalidRange`](Self::InvalidRange) error.
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }

    /// Creates an [`InvalidCoordinate`](Self::InvalidCoordinate) error.
    pub fn invalid_coordinate(kind: CoordinateKind, value: f64, message: &str) -> Self {
        Self::InvalidCoordinate {
            kind,
            value,
            message: message.to_string(),
        }
    }

    /// Creates an [`UnresolvableBody`](Self::UnresolvableBody) error.
    pub fn unresolvable_body(kind: BodyKind, name: &str) -> Self {
        Self::UnresolvableBody {
            kind,
            name: name.to_string(),
        }
    }

    /// Creates a [`CalculationError`](Self::CalculationError).
    pub fn calculation_error(context: &str, message: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = EphemError::invalid_range("start 2020-01-02 is after end 2020-01-01");
        assert_eq!(
            err.to_string(),
            "Invalid sampling range: start 2020-01-02 is after end 2020-01-01"
        );
    }

    #[test]
    fn test_invalid_coordinate_message() {
        let err = EphemError::invalid_coordinate(
            CoordinateKind::Latitude,
            97.5,
            "magnitude exceeds 90°",
        );
        assert!(err.to_string().contains("Latitude"));
        assert!(err.to_string().contains("97.5"));
    }

    #[test]
    fn test_unresolvable_body_message() {
        let err = EphemError::unresolvable_body(BodyKind::Planet, "Vulcan");
        assert!(err.to_string().contains("Planet"));
        assert!(err.to_string().contains("Vulcan"));
    }

    #[test]
    fn test_calculation_error_message() {
        let err = EphemError::calculation_error("kepler solver", "eccentric anomaly is NaN");
        assert!(err.to_string().contains("Calculation error in kepler solver"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<EphemError>();
        _assert_sync::<EphemError>();
    }
}
