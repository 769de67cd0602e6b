//! moments::moment_fn — moment vectors for simulated minimum distance.
//!
//! Purpose
//! -------
//! Define the [`MomentFunction`] seam through which both the empirical and
//! the simulated datasets are summarized, and the Cobb-Douglas moment vector
//! used to identify `(γ, τ, σ)`.
//!
//! Key behaviors
//! -------------
//! - [`MomentFunction::moments`] maps `(w, c, l)` to a fixed-length vector.
//! - [`CobbDouglasMoments`] returns `(corr(w, c), mean(l), var(c))`.
//! - [`validate_moment_inputs`] enforces equal lengths and `n ≥ 2`; it is the
//!   only source of errors, degenerate spreads surface as `NaN`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The *same* implementation (same formula, same ordering) must be applied
//!   to empirical and simulated data; the estimator enforces this by owning
//!   a single `MomentFunction` and using it for both.
//! - Implementations are pure: identical inputs give identical outputs.
//!
//! Conventions
//! -----------
//! - Second moments use the population convention (see [`sample`]).
//!
//! [`sample`]: crate::moments::sample
use crate::{
    moments::sample::{pearson_correlation, population_variance, sample_mean},
    structural::errors::{ModelError, ModelResult},
};
use ndarray::{Array1, ArrayView1};

/// Number of entries in the Cobb-Douglas moment vector.
pub const MOMENT_DIM: usize = 3;

/// Moment vector Λ.
pub type Moments = Array1<f64>;

/// Summary statistics used as identification targets.
///
/// - `dim()` is the fixed length of every vector returned by `moments`.
/// - `moments(w, c, l)` must validate its inputs (see
///   [`validate_moment_inputs`]) and otherwise let degenerate statistics
///   propagate as `NaN`.
pub trait MomentFunction {
    fn dim(&self) -> usize;

    fn moments(
        &self, wage: ArrayView1<f64>, consumption: ArrayView1<f64>, leisure: ArrayView1<f64>,
    ) -> ModelResult<Moments>;
}

/// `(corr(w, c), mean(l), var(c))` — the moments of the labor-supply model.
///
/// - `corr(w, c)` pins down the signal-to-noise ratio `(1 − τ)/σ`.
/// - `mean(l)` pins down `1 − γ`.
/// - `var(c)` pins down the scale `γ²((1 − τ)²var(w) + σ²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CobbDouglasMoments;

impl MomentFunction for CobbDouglasMoments {
    fn dim(&self) -> usize {
        MOMENT_DIM
    }

    fn moments(
        &self, wage: ArrayView1<f64>, consumption: ArrayView1<f64>, leisure: ArrayView1<f64>,
    ) -> ModelResult<Moments> {
        validate_moment_inputs(wage, consumption, leisure)?;
        Ok(Array1::from(vec![
            pearson_correlation(wage, consumption),
            sample_mean(leisure),
            population_variance(consumption),
        ]))
    }
}

/// Check that moment inputs share a common length of at least two.
///
/// # Errors
/// - [`ModelError::MomentLengthMismatch`] if the three lengths differ.
/// - [`ModelError::InsufficientObservations`] if the common length is < 2.
pub fn validate_moment_inputs(
    wage: ArrayView1<f64>, consumption: ArrayView1<f64>, leisure: ArrayView1<f64>,
) -> ModelResult<()> {
    let n = wage.len();
    if consumption.len() != n || leisure.len() != n {
        return Err(ModelError::MomentLengthMismatch {
            wage: n,
            consumption: consumption.len(),
            leisure: leisure.len(),
        });
    }
    if n < 2 {
        return Err(ModelError::InsufficientObservations { len: n });
    }
    Ok(())
}

/// Squared Euclidean distance `‖a − b‖²`.
///
/// Non-finite entries propagate. Callers must ensure `a.len() == b.len()`.
pub fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Ordering and values of `CobbDouglasMoments` on a small dataset.
    // - Purity (identical output on repeated calls).
    // - Input validation and NaN propagation on degenerate data.
    // - Symmetry of `squared_distance`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the moment ordering (corr, mean(l), var(c)).
    //
    // Given
    // -----
    // - c = 2w exactly, l = (0.4, 0.6, 0.5, 0.5).
    //
    // Expect
    // ------
    // - Λ = (1, 0.5, var(2w)).
    fn cobb_douglas_moments_have_expected_order() {
        // Arrange
        let w = array![1.0, 2.0, 3.0, 4.0];
        let c = w.mapv(|v| 2.0 * v);
        let l = array![0.4, 0.6, 0.5, 0.5];

        // Act
        let m = CobbDouglasMoments.moments(w.view(), c.view(), l.view()).unwrap();

        // Assert
        assert_eq!(m.len(), MOMENT_DIM);
        assert_relative_eq!(m[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(m[2], 5.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The moment function carries no hidden state.
    //
    // Given
    // -----
    // - The same inputs evaluated twice.
    //
    // Expect
    // ------
    // - Bitwise-identical outputs.
    fn cobb_douglas_moments_are_pure() {
        // Arrange
        let w = array![1.3, 0.2, 5.1, 2.2, 0.9];
        let c = array![0.7, 0.3, 2.0, 1.1, 0.2];
        let l = array![0.5, 0.7, 0.4, 0.45, 0.6];

        // Act
        let first = CobbDouglasMoments.moments(w.view(), c.view(), l.view()).unwrap();
        let second = CobbDouglasMoments.moments(w.view(), c.view(), l.view()).unwrap();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Reject inputs of unequal length or fewer than two points.
    //
    // Given
    // -----
    // - Mismatched lengths; then single-element series.
    //
    // Expect
    // ------
    // - `MomentLengthMismatch` and `InsufficientObservations`.
    fn moments_validate_lengths() {
        // Arrange
        let w = array![1.0, 2.0];
        let c = array![1.0];
        let one = array![1.0];

        // Act
        let mismatch = CobbDouglasMoments.moments(w.view(), c.view(), w.view());
        let short = CobbDouglasMoments.moments(one.view(), one.view(), one.view());

        // Assert
        assert_eq!(
            mismatch,
            Err(ModelError::MomentLengthMismatch { wage: 2, consumption: 1, leisure: 2 })
        );
        assert_eq!(short, Err(ModelError::InsufficientObservations { len: 1 }));
    }

    #[test]
    // Purpose
    // -------
    // Constant consumption makes corr(w, c) undefined; it must be NaN while
    // the other moments remain finite.
    //
    // Given
    // -----
    // - c constant, w and l varying.
    //
    // Expect
    // ------
    // - Λ[0] is NaN, Λ[1] and Λ[2] are finite (Λ[2] = 0).
    fn degenerate_consumption_propagates_nan_correlation() {
        // Arrange
        let w = array![1.0, 2.0, 3.0];
        let c = array![1.0, 1.0, 1.0];
        let l = array![0.5, 0.4, 0.6];

        // Act
        let m = CobbDouglasMoments.moments(w.view(), c.view(), l.view()).unwrap();

        // Assert
        assert!(m[0].is_nan());
        assert!(m[1].is_finite());
        assert_eq!(m[2], 0.0);
    }

    #[test]
    // Purpose
    // -------
    // The distance does not depend on which side is "empirical".
    //
    // Given
    // -----
    // - Two moment vectors a and b.
    //
    // Expect
    // ------
    // - d(a, b) = d(b, a) = 0.01 + 0.04 + 0.09.
    fn squared_distance_is_symmetric() {
        // Arrange
        let a = array![0.87, 0.48, 1.0];
        let b = array![0.77, 0.68, 1.3];

        // Act
        let ab = squared_distance(a.view(), b.view());
        let ba = squared_distance(b.view(), a.view());

        // Assert
        assert_eq!(ab, ba);
        assert_relative_eq!(ab, 0.14, epsilon = 1e-12);
    }
}
