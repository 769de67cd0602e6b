//! Errors for the structural labor-supply model (parameter validation, data
//! containers, moment inputs, and simulation settings).
//!
//! This module defines the model-layer error type, [`ModelError`], used by
//! parameter construction, dataset validation, moment evaluation, and shock /
//! wage simulation. It implements `Display`/`Error` and, when the
//! `python-bindings` feature is enabled, converts to a Python `ValueError`.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Wages must be **strictly positive and finite**; consumption and leisure
//!   only need to be finite.
//! - Degenerate moments (zero spread) are *not* errors: they surface as `NaN`
//!   in the moment vector and flow through the objective.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for model-layer operations that may produce [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified error type for the structural model layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Parameters ----
    /// γ must be finite and lie in [0, 1].
    InvalidGamma { value: f64 },

    /// τ must be finite and lie in [0, 1).
    InvalidTau { value: f64 },

    /// σ must be finite and non-negative.
    InvalidSigma { value: f64 },

    /// Optimizer vector has the wrong number of entries.
    ThetaLengthMismatch { expected: usize, actual: usize },

    // ---- Dataset validation ----
    /// Fewer than two observations.
    InsufficientObservations { len: usize },

    /// Series lengths disagree.
    SeriesLengthMismatch { series: &'static str, expected: usize, actual: usize },

    /// A data point is NaN/±inf.
    NonFiniteData { series: &'static str, index: usize, value: f64 },

    /// A wage is ≤ 0.
    NonPositiveWage { index: usize, value: f64 },

    // ---- Moments ----
    /// Moment inputs must share a common length.
    MomentLengthMismatch { wage: usize, consumption: usize, leisure: usize },

    /// Empirical moment vector has the wrong number of entries.
    MomentDimMismatch { expected: usize, actual: usize },

    /// Empirical moments must be finite.
    NonFiniteMoment { index: usize, value: f64 },

    // ---- Simulation ----
    /// At least one simulation replication per observation is required.
    InvalidReplications { value: usize },

    /// Log-normal wage parameters must be finite with a non-negative scale.
    InvalidWageDistribution { mu: f64, sigma: f64 },

    /// Shock buffer length does not match the replicated wage layout.
    ShockLengthMismatch { expected: usize, actual: usize },

    // ---- Options parsing ----
    /// Unknown shock policy name.
    InvalidShockPolicy { name: String },

    /// Unknown invalid-region policy name.
    InvalidRegionPolicy { name: String },

    /// Penalty base must be finite and strictly positive.
    InvalidPenalty { value: f64 },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameters ----
            ModelError::InvalidGamma { value } => {
                write!(f, "Invalid gamma: {value}, must be finite and in [0, 1]")
            }
            ModelError::InvalidTau { value } => {
                write!(f, "Invalid tau: {value}, must be finite and in [0, 1)")
            }
            ModelError::InvalidSigma { value } => {
                write!(f, "Invalid sigma: {value}, must be finite and >= 0")
            }
            ModelError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }

            // ---- Dataset validation ----
            ModelError::InsufficientObservations { len } => {
                write!(f, "Need at least 2 observations, got {len}")
            }
            ModelError::SeriesLengthMismatch { series, expected, actual } => {
                write!(f, "Series '{series}' has length {actual}, expected {expected}")
            }
            ModelError::NonFiniteData { series, index, value } => {
                write!(f, "Non-finite value {value} in '{series}' at index {index}")
            }
            ModelError::NonPositiveWage { index, value } => {
                write!(f, "Wage at index {index} is {value}, must be strictly positive")
            }

            // ---- Moments ----
            ModelError::MomentLengthMismatch { wage, consumption, leisure } => write!(
                f,
                "Moment inputs must have equal length: wage {wage}, consumption {consumption}, \
                 leisure {leisure}"
            ),
            ModelError::MomentDimMismatch { expected, actual } => {
                write!(f, "Moment vector length mismatch: expected {expected}, actual {actual}")
            }
            ModelError::NonFiniteMoment { index, value } => {
                write!(f, "Empirical moment at index {index} is {value}, must be finite")
            }

            // ---- Simulation ----
            ModelError::InvalidReplications { value } => {
                write!(f, "Invalid replication count {value}, must be at least 1")
            }
            ModelError::InvalidWageDistribution { mu, sigma } => write!(
                f,
                "Invalid log-normal wage distribution (mu = {mu}, sigma = {sigma}): \
                 mu must be finite and sigma finite and >= 0"
            ),
            ModelError::ShockLengthMismatch { expected, actual } => {
                write!(f, "Shock buffer length mismatch: expected {expected}, actual {actual}")
            }

            // ---- Options parsing ----
            ModelError::InvalidShockPolicy { name } => write!(
                f,
                "Invalid shock policy '{name}'. Valid options are case insensitive \
                 'CommonRandomNumbers' or 'Fresh'."
            ),
            ModelError::InvalidRegionPolicy { name } => write!(
                f,
                "Invalid region policy '{name}'. Valid options are case insensitive \
                 'Penalty' or 'Propagate'."
            ),
            ModelError::InvalidPenalty { value } => {
                write!(f, "Invalid penalty base {value}, must be finite and > 0")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ModelError> for PyErr {
    fn from(err: ModelError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` messages embedding the offending payload.
    //
    // They intentionally DO NOT cover:
    // - Conversion to Python exceptions (exercised from Python).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check that parameter errors report the rejected value.
    //
    // Given
    // -----
    // - `InvalidTau { value: 1.0 }`.
    //
    // Expect
    // ------
    // - The message contains the value and the admissible interval.
    fn display_invalid_tau_mentions_value_and_interval() {
        // Arrange
        let err = ModelError::InvalidTau { value: 1.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('1'), "message should embed the value: {msg}");
        assert!(msg.contains("[0, 1)"), "message should embed the interval: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Check that dataset errors name the offending series and index.
    //
    // Given
    // -----
    // - `NonFiniteData` for the leisure series at index 7.
    //
    // Expect
    // ------
    // - The message contains `leisure` and `7`.
    fn display_non_finite_data_names_series_and_index() {
        // Arrange
        let err = ModelError::NonFiniteData { series: "leisure", index: 7, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("leisure"));
        assert!(msg.contains('7'));
    }
}
