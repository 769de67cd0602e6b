//! SMD options — configuration for the simulated minimum distance estimator.
//!
//! Purpose
//! -------
//! Collect every knob of an SMD run in one validated struct: the number of
//! simulation replications, the shock seed and reuse policy, the treatment
//! of parameter proposals outside the admissible region, and the optimizer
//! settings.
//!
//! Key behaviors
//! -------------
//! - [`SMDOptions::new`] rejects `replications == 0`; the remaining
//!   components are validated by their own constructors.
//! - [`InvalidRegion`] decides what the objective returns for θ outside
//!   `γ ∈ [0, 1]`, `τ ∈ [0, 1)`, `σ ≥ 0`.
//! - String parsing (`FromStr`) is case-insensitive for all enum choices.
//!
//! Conventions
//! -----------
//! - Defaults: `S = 100`, seed `42`, common random numbers,
//!   `Penalty { base: 1e6 }`, and `OptimOptions::default()`.
use crate::{
    optimization::objective_optimizer::OptimOptions,
    simulation::shocks::{DEFAULT_SHOCK_SEED, ShockPolicy},
    structural::errors::{ModelError, ModelResult},
};
use std::str::FromStr;

/// Default number of simulated shocks per observed wage.
pub const DEFAULT_REPLICATIONS: usize = 100;

/// Default base of the out-of-region penalty.
pub const DEFAULT_PENALTY_BASE: f64 = 1e6;

/// Cap on the violation fed into the penalty, keeping it finite for
/// non-finite θ.
const MAX_VIOLATION: f64 = 1e12;

/// Objective behavior for θ outside the admissible region.
///
/// - `Penalty { base }`: return `base · (1 + violation)` where `violation` is
///   the L1 distance of θ from the box. Finite, larger than any in-region
///   loss for a sensible `base`, and increasing away from the box so
///   finite-difference gradients point back inside.
/// - `Propagate`: return `NaN`; the optimizer stops with
///   `OptError::NonFiniteCost`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidRegion {
    Penalty { base: f64 },
    Propagate,
}

impl InvalidRegion {
    /// Validated penalty policy.
    ///
    /// # Errors
    /// [`ModelError::InvalidPenalty`] unless `base` is finite and > 0.
    pub fn penalty(base: f64) -> ModelResult<Self> {
        if !base.is_finite() || base <= 0.0 {
            return Err(ModelError::InvalidPenalty { value: base });
        }
        Ok(InvalidRegion::Penalty { base })
    }

    /// Objective value for a point at distance `violation > 0` from the box.
    pub fn value(&self, violation: f64) -> f64 {
        match self {
            InvalidRegion::Penalty { base } => base * (1.0 + violation.min(MAX_VIOLATION)),
            InvalidRegion::Propagate => f64::NAN,
        }
    }
}

impl Default for InvalidRegion {
    fn default() -> Self {
        InvalidRegion::Penalty { base: DEFAULT_PENALTY_BASE }
    }
}

impl FromStr for InvalidRegion {
    type Err = ModelError;

    /// `"penalty"` (default base) or `"propagate"`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "penalty" => Ok(InvalidRegion::default()),
            "propagate" => Ok(InvalidRegion::Propagate),
            _ => Err(ModelError::InvalidRegionPolicy { name: s.to_string() }),
        }
    }
}

/// Configuration of an SMD estimation run.
///
/// Fields
/// ------
/// - `replications`: `usize`
///   Number of simulated shocks `S` per observed wage; `≥ 1`.
/// - `shock_seed`: `u64`
///   Seed of the objective's [`ShockSource`](crate::simulation::ShockSource).
/// - `shock_policy`: [`ShockPolicy`]
///   Common random numbers (deterministic surface) or a fresh stream.
/// - `invalid_region`: [`InvalidRegion`]
///   Treatment of inadmissible θ.
/// - `optim_opts`: [`OptimOptions`]
///   L-BFGS tolerances, line search, verbosity, and memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SMDOptions {
    pub replications: usize,
    pub shock_seed: u64,
    pub shock_policy: ShockPolicy,
    pub invalid_region: InvalidRegion,
    pub optim_opts: OptimOptions,
}

impl SMDOptions {
    /// Construct validated SMD options.
    ///
    /// # Errors
    /// - [`ModelError::InvalidReplications`] if `replications == 0`.
    /// - [`ModelError::InvalidPenalty`] if `invalid_region` is a `Penalty`
    ///   whose base is not finite and > 0.
    pub fn new(
        replications: usize, shock_seed: u64, shock_policy: ShockPolicy,
        invalid_region: InvalidRegion, optim_opts: OptimOptions,
    ) -> ModelResult<Self> {
        if replications == 0 {
            return Err(ModelError::InvalidReplications { value: replications });
        }
        if let InvalidRegion::Penalty { base } = invalid_region {
            InvalidRegion::penalty(base)?;
        }
        Ok(Self { replications, shock_seed, shock_policy, invalid_region, optim_opts })
    }
}

impl Default for SMDOptions {
    fn default() -> Self {
        Self {
            replications: DEFAULT_REPLICATIONS,
            shock_seed: DEFAULT_SHOCK_SEED,
            shock_policy: ShockPolicy::default(),
            invalid_region: InvalidRegion::default(),
            optim_opts: OptimOptions::default(),
        }
    }
}
