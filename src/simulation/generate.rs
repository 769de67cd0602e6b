//! simulation::generate — synthetic labor-supply datasets.
//!
//! Purpose
//! -------
//! Produce an "observed" dataset from known structural parameters so the
//! estimator can be exercised end to end: wages are log-normal, shocks come
//! from a [`ShockSource`], and choices come from the same closed form the
//! objective uses.
//!
//! Key behaviors
//! -------------
//! - [`WageDistribution`] validates the log-normal `(μ, σ_w)` pair.
//! - [`draw_wages`] samples `n` wages from a caller-supplied generator.
//! - [`simulate_labor_data`] applies one shock per observation (`S = 1`)
//!   through [`solve_into`].
//! - [`generate_labor_data`] bundles both steps under a
//!   [`SimulationConfig`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Generated data reuse the objective's draw order: with the same shock
//!   seed, common random numbers and `S = 1`, the objective at the true θ
//!   reproduces the dataset exactly.
use crate::{
    simulation::{dataset::LaborData, shocks::ShockSource},
    structural::{
        errors::{ModelError, ModelResult},
        labor_supply::solve_into,
        params::ModelParams,
    },
};
use ndarray::Array1;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, LogNormal};

/// Default number of simulated agents.
pub const DEFAULT_N_OBS: usize = 10_000;

/// Default seed for the wage draw.
pub const DEFAULT_WAGE_SEED: u64 = 2024;

/// Log-normal wage distribution: `ln w ~ N(μ, σ_w²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WageDistribution {
    pub mu: f64,
    pub sigma: f64,
}

impl WageDistribution {
    /// # Errors
    /// [`ModelError::InvalidWageDistribution`] unless `mu` is finite and
    /// `sigma` is finite and non-negative.
    pub fn new(mu: f64, sigma: f64) -> ModelResult<Self> {
        if !mu.is_finite() || !sigma.is_finite() || sigma < 0.0 {
            return Err(ModelError::InvalidWageDistribution { mu, sigma });
        }
        Ok(Self { mu, sigma })
    }
}

impl Default for WageDistribution {
    fn default() -> Self {
        Self { mu: 0.0, sigma: 1.0 }
    }
}

/// Settings for a synthetic dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub n_obs: usize,
    pub wage: WageDistribution,
    pub wage_seed: u64,
}

impl SimulationConfig {
    /// # Errors
    /// [`ModelError::InsufficientObservations`] if `n_obs < 2`.
    pub fn new(n_obs: usize, wage: WageDistribution, wage_seed: u64) -> ModelResult<Self> {
        if n_obs < 2 {
            return Err(ModelError::InsufficientObservations { len: n_obs });
        }
        Ok(Self { n_obs, wage, wage_seed })
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_obs: DEFAULT_N_OBS,
            wage: WageDistribution::default(),
            wage_seed: DEFAULT_WAGE_SEED,
        }
    }
}

/// Draw `n` log-normal wages.
///
/// # Errors
/// [`ModelError::InvalidWageDistribution`] if the distribution is rejected
/// by `rand_distr`.
pub fn draw_wages(
    n: usize, dist: &WageDistribution, rng: &mut StdRng,
) -> ModelResult<Array1<f64>> {
    let lognormal = LogNormal::new(dist.mu, dist.sigma)
        .map_err(|_| ModelError::InvalidWageDistribution { mu: dist.mu, sigma: dist.sigma })?;
    Ok(Array1::from_iter((0..n).map(|_| lognormal.sample(rng))))
}

/// Simulate consumption and leisure for given wages, one shock per agent.
///
/// # Errors
/// Propagates [`LaborData::new`] validation (short input, non-positive or
/// non-finite wages).
pub fn simulate_labor_data(
    params: &ModelParams, wage: Array1<f64>, shocks: &ShockSource,
) -> ModelResult<LaborData> {
    let n = wage.len();
    let eps = shocks.draw(n, params.sigma);
    let mut wage_out = Array1::zeros(n);
    let mut consumption = Array1::zeros(n);
    let mut leisure = Array1::zeros(n);
    solve_into(
        params,
        wage.view(),
        eps.view(),
        1,
        wage_out.view_mut(),
        consumption.view_mut(),
        leisure.view_mut(),
    )?;
    LaborData::new(wage, consumption, leisure)
}

/// Draw wages per `config` and simulate a dataset at `params`.
pub fn generate_labor_data(
    params: &ModelParams, config: &SimulationConfig, shocks: &ShockSource,
) -> ModelResult<LaborData> {
    let mut rng = StdRng::seed_from_u64(config.wage_seed);
    let wage = draw_wages(config.n_obs, &config.wage, &mut rng)?;
    simulate_labor_data(params, wage, shocks)
}
