//! Observed labor-supply data container.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the cross-section of wages,
//! consumption, and leisure that the SMD estimator matches against. All
//! input checks live here so the moment and objective layers can assume
//! clean data.
//!
//! Invariants & assumptions
//! ------------------------
//! - The three series share a common length `n ≥ 2`.
//! - Every entry is finite; wages are strictly positive (they enter the
//!   leisure denominator of the structural model).
//! - Consumption and leisure may take any finite sign: the additive shock
//!   can push either below zero.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each rejection branch of
//!   [`LaborData::new`].
use crate::structural::errors::{ModelError, ModelResult};
use ndarray::Array1;

/// `LaborData` — validated `(wage, consumption, leisure)` cross-section.
///
/// Fields
/// ------
/// - `wage`: `Array1<f64>`
///   Observed wages; finite and > 0.
/// - `consumption`: `Array1<f64>`
///   Observed consumption; finite.
/// - `leisure`: `Array1<f64>`
///   Observed leisure; finite.
///
/// Invariants
/// ----------
/// - `wage.len() == consumption.len() == leisure.len() >= 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaborData {
    pub wage: Array1<f64>,
    pub consumption: Array1<f64>,
    pub leisure: Array1<f64>,
}

impl LaborData {
    /// Construct a validated [`LaborData`].
    ///
    /// Errors
    /// ------
    /// - `ModelError::InsufficientObservations`
    ///   Returned when `wage.len() < 2`.
    /// - `ModelError::SeriesLengthMismatch { series, expected, actual }`
    ///   Returned when consumption or leisure differ in length from wage.
    /// - `ModelError::NonFiniteData { series, index, value }`
    ///   Returned at the first NaN/±inf entry, scanning wage, consumption,
    ///   then leisure.
    /// - `ModelError::NonPositiveWage { index, value }`
    ///   Returned at the first wage ≤ 0.
    pub fn new(
        wage: Array1<f64>, consumption: Array1<f64>, leisure: Array1<f64>,
    ) -> ModelResult<Self> {
        let n = wage.len();
        if n < 2 {
            return Err(ModelError::InsufficientObservations { len: n });
        }
        for (series, len) in [("consumption", consumption.len()), ("leisure", leisure.len())] {
            if len != n {
                return Err(ModelError::SeriesLengthMismatch { series, expected: n, actual: len });
            }
        }

        for (index, &value) in wage.iter().enumerate() {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteData { series: "wage", index, value });
            }
            if value <= 0.0 {
                return Err(ModelError::NonPositiveWage { index, value });
            }
        }
        for (series, values) in [("consumption", &consumption), ("leisure", &leisure)] {
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite())
            {
                return Err(ModelError::NonFiniteData { series, index, value });
            }
        }

        Ok(Self { wage, consumption, leisure })
    }

    /// Number of observations `n`.
    pub fn len(&self) -> usize {
        self.wage.len()
    }

    /// Always `false` for a validated container; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.wage.is_empty()
    }
}
