//! SMD estimator — fit the labor-supply model by simulated minimum distance.
//!
//! Purpose
//! -------
//! Own an [`SMDObjective`] together with its options and cache the outcome of
//! the last fit, so callers can estimate θ = (γ, τ, σ) from a [`LaborData`]
//! sample and then inspect or report the result.
//!
//! Key behaviors
//! -------------
//! - [`SMDEstimator::fit`] computes empirical targets, runs L-BFGS through
//!   [`minimize`], and stores both the raw [`OptimOutcome`] and a validated
//!   [`ModelParams`] snapshot.
//! - [`SMDEstimator::objective_at`] evaluates `Q(θ)` without optimizing,
//!   which is useful for profiling the surface.
//! - [`SMDEstimator::report`] requires a prior fit and returns
//!   [`OptError::ModelNotFitted`] otherwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - The estimator is built for a fixed number of observations; datasets of
//!   another size are rejected with [`OptError::DataLengthMismatch`].
//! - The moment function used for the targets is the one used for the
//!   simulated moments.
use crate::{
    estimation::{
        objective::{SMDObjective, SMDTargets},
        options::SMDOptions,
        report::EstimationReport,
    },
    moments::moment_fn::{CobbDouglasMoments, MomentFunction, Moments},
    optimization::{
        errors::{OptError, OptResult},
        objective_optimizer::{Objective, OptimOutcome, Theta, minimize},
    },
    simulation::dataset::LaborData,
    structural::params::ModelParams,
};
use ndarray::ArrayView1;

/// Simulated minimum distance estimator.
///
/// Fields
/// ------
/// - `options`: [`SMDOptions`] the estimator was built with.
/// - `objective`: the [`SMDObjective`] (scratch buffers and shock source).
/// - `results`: last [`OptimOutcome`], populated by `fit`.
/// - `fitted_params`: validated θ̂, populated by `fit`.
#[derive(Debug)]
pub struct SMDEstimator<M: MomentFunction = CobbDouglasMoments> {
    pub options: SMDOptions,
    pub objective: SMDObjective<M>,
    pub results: Option<OptimOutcome>,
    pub fitted_params: Option<ModelParams>,
}

impl SMDEstimator<CobbDouglasMoments> {
    /// Estimator for `n_obs` observations using the Cobb–Douglas moments.
    pub fn new(options: SMDOptions, n_obs: usize) -> Self {
        Self::with_moments(CobbDouglasMoments, options, n_obs)
    }
}

impl<M: MomentFunction> SMDEstimator<M> {
    /// Estimator with a caller-supplied moment function.
    pub fn with_moments(moment_fn: M, options: SMDOptions, n_obs: usize) -> Self {
        let objective = SMDObjective::new(moment_fn, &options, n_obs);
        Self { options, objective, results: None, fitted_params: None }
    }

    pub fn n_obs(&self) -> usize {
        self.objective.n_obs()
    }

    /// Empirical targets for `data`.
    ///
    /// # Errors
    /// - [`OptError::DataLengthMismatch`] if `data.len() != n_obs`.
    /// - Model errors from the moment function.
    pub fn targets(&self, data: &LaborData) -> OptResult<SMDTargets> {
        if data.len() != self.n_obs() {
            return Err(OptError::DataLengthMismatch { expected: self.n_obs(), actual: data.len() });
        }
        Ok(SMDTargets::from_data(self.objective.moment_fn(), data)?)
    }

    /// Evaluate `Q(θ)` against `targets` without optimizing.
    pub fn objective_at(&self, theta: &Theta, targets: &SMDTargets) -> OptResult<f64> {
        self.objective.value(theta, targets)
    }

    /// Simulated moments at θ for the observed `wage` vector.
    ///
    /// # Errors
    /// - Model errors if θ is not admissible.
    /// - [`OptError::DataLengthMismatch`] if `wage.len() != n_obs`.
    pub fn simulated_moments(&self, theta: &Theta, wage: ArrayView1<f64>) -> OptResult<Moments> {
        let params = ModelParams::from_theta(theta.view())?;
        self.objective.simulated_moments(&params, wage)
    }

    /// Fit θ by SMD starting from `theta0` (consumed) and cache the results.
    ///
    /// 1. Compute empirical targets from `data`.
    /// 2. Minimize `Q(θ)` with the configured L-BFGS options.
    /// 3. Store the outcome and the validated estimate.
    ///
    /// # Errors
    /// - [`OptError::DataLengthMismatch`] for a dataset of the wrong size.
    /// - [`OptError::InfeasibleStart`] if `theta0` is outside the admissible
    ///   box; other `check` errors for degenerate targets.
    /// - Solver errors from the optimizer, including
    ///   [`OptError::NonFiniteCost`] under `InvalidRegion::Propagate`.
    pub fn fit(&mut self, theta0: Theta, data: &LaborData) -> OptResult<()> {
        let targets = self.targets(data)?;
        let outcome = minimize(&self.objective, theta0, &targets, &self.options.optim_opts)?;
        let params = ModelParams::from_theta(outcome.theta_hat.view())?;
        self.results = Some(outcome);
        self.fitted_params = Some(params);
        Ok(())
    }

    /// Summarize the last fit.
    ///
    /// # Errors
    /// [`OptError::ModelNotFitted`] if `fit` has not succeeded yet.
    pub fn report(
        &self, initial: ArrayView1<f64>, truth: Option<ModelParams>,
    ) -> OptResult<EstimationReport> {
        let outcome = self.results.as_ref().ok_or(OptError::ModelNotFitted)?;
        let estimate = self.fitted_params.ok_or(OptError::ModelNotFitted)?;
        Ok(EstimationReport {
            truth,
            initial: initial.to_owned(),
            estimate,
            objective_value: outcome.value,
            converged: outcome.converged,
            status: outcome.status.clone(),
            iterations: outcome.iterations,
        })
    }
}
