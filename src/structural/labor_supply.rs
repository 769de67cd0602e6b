//! Closed-form Cobb-Douglas labor-supply solution.
//!
//! Purpose
//! -------
//! Map primitives `(w, ε)` and parameters `(γ, τ)` into optimal choices
//! `(c, l)` for an agent with Cobb-Douglas utility over consumption and
//! leisure, a unit time endowment, a proportional labor tax `τ`, and an
//! additive income shock `ε`:
//!
//! - `c = γ(1 − τ)w + γε`
//! - `l = (1 − γ) + (1 − γ)ε / ((1 − τ)w)`
//!
//! Both choices exhaust the budget `c + (1 − τ)w·l = (1 − τ)w + ε`.
//!
//! Key behaviors
//! -------------
//! - [`consumption`] and [`leisure`] evaluate a single agent.
//! - [`solve_into`] evaluates a replicated panel in place: each wage `w_i`
//!   is paired with `S` consecutive shocks, entry `i·S + s`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Functions are pure and deterministic.
//! - No guard is applied at `τ = 1`: the leisure denominator vanishes and
//!   the result is `±∞` for `ε ≠ 0` or `NaN` for `ε = 0`. Callers that can
//!   propose such values (the optimizer) handle them upstream.
//!
//! Testing notes
//! -------------
//! - Unit tests check the budget identity on a grid, the replicated layout
//!   of [`solve_into`], and the non-finite outcome at `τ = 1`.
use crate::structural::{
    errors::{ModelError, ModelResult},
    params::ModelParams,
};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Optimal consumption `c = γ(1 − τ)w + γε`.
#[inline]
pub fn consumption(wage: f64, shock: f64, gamma: f64, tau: f64) -> f64 {
    gamma * (1.0 - tau) * wage + gamma * shock
}

/// Optimal leisure `l = (1 − γ) + (1 − γ)ε / ((1 − τ)w)`.
#[inline]
pub fn leisure(wage: f64, shock: f64, gamma: f64, tau: f64) -> f64 {
    (1.0 - gamma) + (1.0 - gamma) * shock / ((1.0 - tau) * wage)
}

/// solve_into — evaluate the model over a replicated wage panel.
///
/// Parameters
/// ----------
/// - `params`: `&ModelParams`
///   Structural parameters; only `γ` and `τ` enter the closed form, `σ` is
///   already folded into `shocks`.
/// - `wage`: `ArrayView1<f64>`
///   Observed wages, length `n`.
/// - `shocks`: `ArrayView1<f64>`
///   Income shocks, length `n·S`, observation-major.
/// - `replications`: `usize`
///   Number of shocks `S` per wage.
/// - `wage_out`, `consumption_out`, `leisure_out`: `ArrayViewMut1<f64>`
///   Output buffers of length `n·S`; `wage_out[i·S + s] = wage[i]`.
///
/// Errors
/// ------
/// - `ModelError::ShockLengthMismatch`
///   Returned when `shocks` or any output buffer is not `n·S` long.
pub fn solve_into(
    params: &ModelParams, wage: ArrayView1<f64>, shocks: ArrayView1<f64>, replications: usize,
    mut wage_out: ArrayViewMut1<f64>, mut consumption_out: ArrayViewMut1<f64>,
    mut leisure_out: ArrayViewMut1<f64>,
) -> ModelResult<()> {
    let total = wage.len() * replications;
    for len in [shocks.len(), wage_out.len(), consumption_out.len(), leisure_out.len()] {
        if len != total {
            return Err(ModelError::ShockLengthMismatch { expected: total, actual: len });
        }
    }

    let (gamma, tau) = (params.gamma, params.tau);
    for (i, &w) in wage.iter().enumerate() {
        for s in 0..replications {
            let k = i * replications + s;
            let eps = shocks[k];
            wage_out[k] = w;
            consumption_out[k] = consumption(w, eps, gamma, tau);
            leisure_out[k] = leisure(w, eps, gamma, tau);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The budget identity `c + (1 − τ)w·l = (1 − τ)w + ε`.
    // - Replicated layout and length checks in `solve_into`.
    // - Behavior at the τ = 1 boundary.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the closed form exhausts the budget.
    //
    // Given
    // -----
    // - A grid over w > 0, ε ∈ ℝ, γ ∈ [0, 1], τ ∈ [0, 1).
    //
    // Expect
    // ------
    // - `c + (1 − τ)w·l` equals `(1 − τ)w + ε` up to rounding.
    fn budget_identity_holds_on_grid() {
        for &w in &[0.05, 0.7, 1.0, 3.5, 40.0] {
            for &eps in &[-2.0, -0.3, 0.0, 0.8, 5.0] {
                for &gamma in &[0.0, 0.25, 0.5, 0.9, 1.0] {
                    for &tau in &[0.0, 0.2, 0.6, 0.95] {
                        // Act
                        let c = consumption(w, eps, gamma, tau);
                        let l = leisure(w, eps, gamma, tau);
                        let lhs = c + (1.0 - tau) * w * l;
                        let rhs = (1.0 - tau) * w + eps;

                        // Assert
                        assert_relative_eq!(lhs, rhs, epsilon = 1e-10, max_relative = 1e-10);
                    }
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Without shocks the agent spends the γ share of net income and keeps
    // the (1 − γ) share of time.
    //
    // Given
    // -----
    // - w = 2, ε = 0, γ = 0.5, τ = 0.2.
    //
    // Expect
    // ------
    // - c = 0.8, l = 0.5.
    fn zero_shock_gives_cobb_douglas_shares() {
        // Act
        let c = consumption(2.0, 0.0, 0.5, 0.2);
        let l = leisure(2.0, 0.0, 0.5, 0.2);

        // Assert
        assert_relative_eq!(c, 0.8, epsilon = 1e-12);
        assert_relative_eq!(l, 0.5, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Document the unguarded τ = 1 boundary.
    //
    // Given
    // -----
    // - τ = 1 with ε = 1 and ε = 0.
    //
    // Expect
    // ------
    // - Leisure is +∞ for ε > 0 and NaN for ε = 0; consumption stays finite.
    fn leisure_is_non_finite_at_unit_tax_rate() {
        // Act
        let l_pos = leisure(1.5, 1.0, 0.5, 1.0);
        let l_zero = leisure(1.5, 0.0, 0.5, 1.0);
        let c = consumption(1.5, 1.0, 0.5, 1.0);

        // Assert
        assert!(l_pos.is_infinite() && l_pos > 0.0);
        assert!(l_zero.is_nan());
        assert!(c.is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Check the observation-major replication layout.
    //
    // Given
    // -----
    // - Two wages, S = 2, four distinct shocks.
    //
    // Expect
    // ------
    // - Wages repeated as (w0, w0, w1, w1) and each output matches the
    //   scalar closed form at the same index.
    fn solve_into_repeats_each_wage_s_times() {
        // Arrange
        let params = ModelParams::new(0.5, 0.2, 1.0).unwrap();
        let wage = array![1.0, 2.0];
        let shocks = array![0.1, -0.1, 0.3, -0.4];
        let mut w_out = Array1::<f64>::zeros(4);
        let mut c_out = Array1::<f64>::zeros(4);
        let mut l_out = Array1::<f64>::zeros(4);

        // Act
        solve_into(
            &params,
            wage.view(),
            shocks.view(),
            2,
            w_out.view_mut(),
            c_out.view_mut(),
            l_out.view_mut(),
        )
        .expect("buffers are correctly sized");

        // Assert
        assert_eq!(w_out, array![1.0, 1.0, 2.0, 2.0]);
        for k in 0..4 {
            assert_eq!(c_out[k], consumption(w_out[k], shocks[k], 0.5, 0.2));
            assert_eq!(l_out[k], leisure(w_out[k], shocks[k], 0.5, 0.2));
        }
    }

    #[test]
    // Purpose
    // -------
    // Reject shock buffers that do not match `n · S`.
    //
    // Given
    // -----
    // - Two wages, S = 2, but only three shocks.
    //
    // Expect
    // ------
    // - `ShockLengthMismatch { expected: 4, actual: 3 }`.
    fn solve_into_rejects_mismatched_shocks() {
        // Arrange
        let params = ModelParams::new(0.5, 0.2, 1.0).unwrap();
        let wage = array![1.0, 2.0];
        let shocks = array![0.1, -0.1, 0.3];
        let mut w_out = Array1::<f64>::zeros(4);
        let mut c_out = Array1::<f64>::zeros(4);
        let mut l_out = Array1::<f64>::zeros(4);

        // Act
        let result = solve_into(
            &params,
            wage.view(),
            shocks.view(),
            2,
            w_out.view_mut(),
            c_out.view_mut(),
            l_out.view_mut(),
        );

        // Assert
        assert_eq!(result, Err(ModelError::ShockLengthMismatch { expected: 4, actual: 3 }));
    }
}
