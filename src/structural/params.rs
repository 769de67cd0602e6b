//! Structural parameter record θ = (γ, τ, σ) and its optimizer-space mapping.
//!
//! This module provides the validated **model-space** container
//! [`ModelParams`] and the conversions between it and the optimizer vector
//! `θ` (`ndarray::Array1<f64>` of length [`N_PARAMS`]).
//!
//! ## Layout
//! - `θ[0] = γ` — consumption-preference weight, `γ ∈ [0, 1]`.
//! - `θ[1] = τ` — tax rate, `τ ∈ [0, 1)`.
//! - `θ[2] = σ` — shock standard deviation, `σ ≥ 0`.
//!
//! ## Admissible region
//! The optimizer searches ℝ³ without constraints. Points outside the box
//! above are never turned into a [`ModelParams`]; instead
//! [`feasibility_violation`] measures how far a raw vector lies from the box
//! so the objective can price the violation (see `estimation::options`).
use crate::structural::errors::{ModelError, ModelResult};
use ndarray::{Array1, ArrayView1};

/// Number of structural parameters.
pub const N_PARAMS: usize = 3;

/// Smallest admissible distance of τ from 1.
///
/// At τ = 1 the leisure denominator `(1 − τ)w` vanishes; proposals closer
/// than this are treated as outside the admissible region.
pub const TAU_MARGIN: f64 = 1e-8;

/// Validated structural parameters of the Cobb-Douglas labor-supply model.
///
/// Invariants are checked at construction; a value of this type always
/// satisfies `γ ∈ [0, 1]`, `τ ∈ [0, 1)`, `σ ≥ 0`, all finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// Relative preference for consumption.
    pub gamma: f64,
    /// Proportional tax on labor income.
    pub tau: f64,
    /// Standard deviation of the Gaussian income shock.
    pub sigma: f64,
}

impl ModelParams {
    /// Construct validated parameters.
    ///
    /// # Errors
    /// - [`ModelError::InvalidGamma`] if `gamma` is non-finite or outside [0, 1].
    /// - [`ModelError::InvalidTau`] if `tau` is non-finite or outside [0, 1).
    /// - [`ModelError::InvalidSigma`] if `sigma` is non-finite or negative.
    pub fn new(gamma: f64, tau: f64, sigma: f64) -> ModelResult<Self> {
        if !gamma.is_finite() || !(0.0..=1.0).contains(&gamma) {
            return Err(ModelError::InvalidGamma { value: gamma });
        }
        if !tau.is_finite() || !(0.0..1.0).contains(&tau) {
            return Err(ModelError::InvalidTau { value: tau });
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(ModelError::InvalidSigma { value: sigma });
        }
        Ok(Self { gamma, tau, sigma })
    }

    /// Build validated parameters from an optimizer vector `(γ, τ, σ)`.
    ///
    /// # Errors
    /// - [`ModelError::ThetaLengthMismatch`] if `theta.len() != 3`.
    /// - Any error from [`ModelParams::new`].
    pub fn from_theta(theta: ArrayView1<f64>) -> ModelResult<Self> {
        let (gamma, tau, sigma) = split_theta(theta)?;
        Self::new(gamma, tau, sigma)
    }

    /// Map parameters to the optimizer vector `(γ, τ, σ)`.
    pub fn to_theta(&self) -> Array1<f64> {
        Array1::from(vec![self.gamma, self.tau, self.sigma])
    }
}

/// Unpack a raw optimizer vector into `(γ, τ, σ)` without range checks.
///
/// # Errors
/// Returns [`ModelError::ThetaLengthMismatch`] if `theta.len() != 3`.
pub fn split_theta(theta: ArrayView1<f64>) -> ModelResult<(f64, f64, f64)> {
    if theta.len() != N_PARAMS {
        return Err(ModelError::ThetaLengthMismatch { expected: N_PARAMS, actual: theta.len() });
    }
    Ok((theta[0], theta[1], theta[2]))
}

/// L1 distance of a raw `(γ, τ, σ)` from the admissible box.
///
/// Returns `0.0` inside the box (with τ capped at `1 − TAU_MARGIN`), a
/// positive number outside it, and `+∞` if any coordinate is non-finite.
pub fn feasibility_violation(gamma: f64, tau: f64, sigma: f64) -> f64 {
    if !gamma.is_finite() || !tau.is_finite() || !sigma.is_finite() {
        return f64::INFINITY;
    }
    let tau_max = 1.0 - TAU_MARGIN;
    (-gamma).max(0.0)
        + (gamma - 1.0).max(0.0)
        + (-tau).max(0.0)
        + (tau - tau_max).max(0.0)
        + (-sigma).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction of `ModelParams` on and off the admissible box.
    // - θ ↔ `ModelParams` conversions and length checks.
    // - `feasibility_violation` inside, outside, and at non-finite inputs.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Accept parameters on the closed edges of the box.
    //
    // Given
    // -----
    // - γ ∈ {0, 1}, τ = 0, σ = 0.
    //
    // Expect
    // ------
    // - `ModelParams::new` succeeds for both corners.
    fn new_accepts_closed_boundaries() {
        // Act
        let lo = ModelParams::new(0.0, 0.0, 0.0);
        let hi = ModelParams::new(1.0, 0.0, 0.0);

        // Assert
        assert!(lo.is_ok(), "lower corner should be valid: {lo:?}");
        assert!(hi.is_ok(), "upper gamma corner should be valid: {hi:?}");
    }

    #[test]
    // Purpose
    // -------
    // Reject each invalid coordinate with its own error variant.
    //
    // Given
    // -----
    // - γ = 1.2, τ = 1.0, σ = −0.1 (one at a time).
    //
    // Expect
    // ------
    // - `InvalidGamma`, `InvalidTau`, and `InvalidSigma` respectively.
    fn new_rejects_out_of_range_coordinates() {
        // Act / Assert
        assert_eq!(ModelParams::new(1.2, 0.2, 1.0), Err(ModelError::InvalidGamma { value: 1.2 }));
        assert_eq!(ModelParams::new(0.5, 1.0, 1.0), Err(ModelError::InvalidTau { value: 1.0 }));
        assert_eq!(
            ModelParams::new(0.5, 0.2, -0.1),
            Err(ModelError::InvalidSigma { value: -0.1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Confirm that `to_theta` and `from_theta` agree on the ordering.
    //
    // Given
    // -----
    // - θ = (0.5, 0.2, 1.0).
    //
    // Expect
    // ------
    // - Fields map to γ, τ, σ in that order and back.
    fn theta_layout_is_gamma_tau_sigma() {
        // Arrange
        let theta = array![0.5, 0.2, 1.0];

        // Act
        let params = ModelParams::from_theta(theta.view()).expect("valid theta");

        // Assert
        assert_eq!(params.gamma, 0.5);
        assert_eq!(params.tau, 0.2);
        assert_eq!(params.sigma, 1.0);
        assert_eq!(params.to_theta(), theta);
    }

    #[test]
    // Purpose
    // -------
    // Reject optimizer vectors of the wrong length.
    //
    // Given
    // -----
    // - θ of length 2.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch { expected: 3, actual: 2 }`.
    fn from_theta_rejects_wrong_length() {
        // Arrange
        let theta = array![0.5, 0.2];

        // Act
        let result = ModelParams::from_theta(theta.view());

        // Assert
        assert_eq!(result, Err(ModelError::ThetaLengthMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Verify the violation measure is zero inside and additive outside.
    //
    // Given
    // -----
    // - An interior point and a point with γ = −0.1, σ = −0.2.
    //
    // Expect
    // ------
    // - 0 inside; 0.3 for the exterior point; ∞ for NaN input.
    fn feasibility_violation_is_l1_distance_to_box() {
        // Act
        let inside = feasibility_violation(0.5, 0.2, 1.0);
        let outside = feasibility_violation(-0.1, 0.2, -0.2);
        let nan = feasibility_violation(f64::NAN, 0.2, 1.0);

        // Assert
        assert_eq!(inside, 0.0);
        assert!((outside - 0.3).abs() < 1e-12);
        assert!(nan.is_infinite());
    }

    #[test]
    // Purpose
    // -------
    // Treat τ at or numerically next to 1 as infeasible.
    //
    // Given
    // -----
    // - τ = 1.0.
    //
    // Expect
    // ------
    // - A strictly positive violation.
    fn feasibility_violation_flags_unit_tax_rate() {
        // Act
        let v = feasibility_violation(0.5, 1.0, 1.0);

        // Assert
        assert!(v > 0.0);
    }
}
