//! SMD objective: squared distance between empirical and simulated moments.
//!
//! Purpose
//! -------
//! Turn a parameter guess θ = (γ, τ, σ) into a scalar loss the optimizer can
//! minimize:
//!
//! 1. price θ outside the admissible box per [`InvalidRegion`];
//! 2. draw `n·S` shocks `ε = σ·z` from the objective's [`ShockSource`];
//! 3. solve the structural model for every `(w_i, ε_is)` pair into scratch
//!    buffers (observation-major layout `i·S + s`);
//! 4. compute the simulated moment vector with the same [`MomentFunction`]
//!    used for the empirical targets;
//! 5. return `‖Λ_emp − Λ_sim‖²`.
//!
//! Key behaviors
//! -------------
//! - Implements [`Objective`] with `Data = SMDTargets`, so it plugs
//!   directly into [`minimize`](crate::optimization::objective_optimizer::minimize).
//! - No analytic gradient: the optimizer finite-differences the value.
//!   Under common random numbers the surface is deterministic and smooth in
//!   θ, which is what makes this viable.
//! - Degenerate simulated moments (`NaN`) propagate into the value.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scratch buffers are sized once for `n_obs × S` and reused; a target
//!   wage vector of a different length is rejected, never resized.
//! - Evaluation mutates only the scratch buffers and the shock generator,
//!   both through `RefCell` (single-threaded use).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the exact-replication zero, symmetry of the distance,
//!   the two invalid-region policies at τ = 1, determinism under common
//!   random numbers vs noise under a fresh stream, and `check` failures.
use crate::{
    estimation::options::{InvalidRegion, SMDOptions},
    moments::moment_fn::{MomentFunction, Moments, squared_distance},
    optimization::{
        errors::{OptError, OptResult},
        objective_optimizer::{Cost, Objective, Theta},
    },
    simulation::{dataset::LaborData, shocks::ShockSource},
    structural::{
        errors::{ModelError, ModelResult},
        labor_supply::solve_into,
        params::{ModelParams, feasibility_violation, split_theta},
    },
};
use ndarray::{Array1, ArrayView1};
use std::cell::RefCell;

/// Empirical targets of an SMD run.
///
/// - `wage`: observed wages reused by every simulation (length `n`).
/// - `empirical`: moment vector of the observed data, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct SMDTargets {
    pub wage: Array1<f64>,
    pub empirical: Moments,
}

impl SMDTargets {
    /// Build targets from wages and precomputed moments.
    ///
    /// Moments are stored as given; finiteness and dimension are checked by
    /// [`SMDObjective::check`] so that degenerate data still evaluate (to
    /// `NaN`).
    ///
    /// # Errors
    /// - [`ModelError::InsufficientObservations`] if `wage.len() < 2`.
    /// - [`ModelError::NonFiniteData`] / [`ModelError::NonPositiveWage`] for
    ///   the first invalid wage.
    pub fn new(wage: Array1<f64>, empirical: Moments) -> ModelResult<Self> {
        if wage.len() < 2 {
            return Err(ModelError::InsufficientObservations { len: wage.len() });
        }
        for (index, &value) in wage.iter().enumerate() {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteData { series: "wage", index, value });
            }
            if value <= 0.0 {
                return Err(ModelError::NonPositiveWage { index, value });
            }
        }
        Ok(Self { wage, empirical })
    }

    /// Compute the empirical moments of `data` with `moment_fn`.
    pub fn from_data<M: MomentFunction>(moment_fn: &M, data: &LaborData) -> ModelResult<Self> {
        let empirical =
            moment_fn.moments(data.wage.view(), data.consumption.view(), data.leisure.view())?;
        Ok(Self { wage: data.wage.clone(), empirical })
    }

    pub fn n_obs(&self) -> usize {
        self.wage.len()
    }
}

/// Reusable buffers for one replicated simulation (`n·S` each).
#[derive(Debug)]
pub struct SMDScratch {
    pub shock_buf: RefCell<Array1<f64>>,
    pub wage_buf: RefCell<Array1<f64>>,
    pub consumption_buf: RefCell<Array1<f64>>,
    pub leisure_buf: RefCell<Array1<f64>>,
}

impl SMDScratch {
    pub fn new(len: usize) -> Self {
        Self {
            shock_buf: RefCell::new(Array1::zeros(len)),
            wage_buf: RefCell::new(Array1::zeros(len)),
            consumption_buf: RefCell::new(Array1::zeros(len)),
            leisure_buf: RefCell::new(Array1::zeros(len)),
        }
    }
}

/// Simulated minimum distance objective for the labor-supply model.
#[derive(Debug)]
pub struct SMDObjective<M: MomentFunction> {
    moment_fn: M,
    n_obs: usize,
    replications: usize,
    invalid_region: InvalidRegion,
    shocks: ShockSource,
    scratch: SMDScratch,
}

impl<M: MomentFunction> SMDObjective<M> {
    /// Build an objective for datasets of `n_obs` observations.
    ///
    /// Scratch buffers are allocated here for `n_obs × options.replications`
    /// entries and the shock source is seeded from `options.shock_seed`.
    pub fn new(moment_fn: M, options: &SMDOptions, n_obs: usize) -> Self {
        Self {
            moment_fn,
            n_obs,
            replications: options.replications,
            invalid_region: options.invalid_region,
            shocks: ShockSource::new(options.shock_seed, options.shock_policy),
            scratch: SMDScratch::new(n_obs * options.replications),
        }
    }

    pub fn moment_fn(&self) -> &M {
        &self.moment_fn
    }

    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    pub fn replications(&self) -> usize {
        self.replications
    }

    pub fn shocks(&self) -> &ShockSource {
        &self.shocks
    }

    /// Restart the shock stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.shocks.reseed(seed);
    }

    /// Simulated moment vector at validated `params` for observed `wage`.
    ///
    /// # Errors
    /// - [`OptError::DataLengthMismatch`] if `wage.len() != n_obs`.
    /// - Model errors from the structural solver or moment function.
    pub fn simulated_moments(
        &self, params: &ModelParams, wage: ArrayView1<f64>,
    ) -> OptResult<Moments> {
        if wage.len() != self.n_obs {
            return Err(OptError::DataLengthMismatch { expected: self.n_obs, actual: wage.len() });
        }
        let mut shock_buf = self.scratch.shock_buf.borrow_mut();
        let mut wage_buf = self.scratch.wage_buf.borrow_mut();
        let mut consumption_buf = self.scratch.consumption_buf.borrow_mut();
        let mut leisure_buf = self.scratch.leisure_buf.borrow_mut();

        self.shocks.draw_into(params.sigma, shock_buf.view_mut());
        solve_into(
            params,
            wage,
            shock_buf.view(),
            self.replications,
            wage_buf.view_mut(),
            consumption_buf.view_mut(),
            leisure_buf.view_mut(),
        )?;
        Ok(self.moment_fn.moments(wage_buf.view(), consumption_buf.view(), leisure_buf.view())?)
    }
}

impl<M: MomentFunction> Objective for SMDObjective<M> {
    type Data = SMDTargets;

    /// `Q(θ) = ‖Λ_emp − Λ_sim(θ)‖²`, or the invalid-region value outside
    /// the admissible box.
    ///
    /// # Errors
    /// - `ThetaLengthMismatch` (wrapped) if `θ.len() != 3`.
    /// - `DataLengthMismatch` if the targets do not match `n_obs`.
    fn value(&self, theta: &Theta, targets: &Self::Data) -> OptResult<Cost> {
        let (gamma, tau, sigma) = split_theta(theta.view())?;
        let violation = feasibility_violation(gamma, tau, sigma);
        if violation > 0.0 {
            return Ok(self.invalid_region.value(violation));
        }
        let params = ModelParams::new(gamma, tau, sigma)?;
        let simulated = self.simulated_moments(&params, targets.wage.view())?;
        Ok(squared_distance(targets.empirical.view(), simulated.view()))
    }

    /// Validate the starting point and targets before optimization.
    ///
    /// # Errors
    /// - `ThetaLengthMismatch` (wrapped) if `θ.len() != 3`.
    /// - [`OptError::InfeasibleStart`] if θ lies outside the admissible box.
    /// - `MomentDimMismatch` / `NonFiniteMoment` (wrapped) for bad targets.
    /// - [`OptError::DataLengthMismatch`] if the wage vector does not match
    ///   the scratch size.
    fn check(&self, theta: &Theta, targets: &Self::Data) -> OptResult<()> {
        let (gamma, tau, sigma) = split_theta(theta.view())?;
        let violation = feasibility_violation(gamma, tau, sigma);
        if violation > 0.0 {
            return Err(OptError::InfeasibleStart { violation });
        }
        let dim = self.moment_fn.dim();
        if targets.empirical.len() != dim {
            return Err(ModelError::MomentDimMismatch {
                expected: dim,
                actual: targets.empirical.len(),
            }
            .into());
        }
        if let Some((index, &value)) =
            targets.empirical.iter().enumerate().find(|(_, v)| !v.is_finite())
        {
            return Err(ModelError::NonFiniteMoment { index, value }.into());
        }
        if targets.n_obs() != self.n_obs {
            return Err(OptError::DataLengthMismatch {
                expected: self.n_obs,
                actual: targets.n_obs(),
            });
        }
        Ok(())
    }
}
