//! objective_optimizer — argmin-powered minimization of scalar objectives.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **minimizing**
//! a scalar objective `Q(θ)`, such as the squared moment distance of the SMD
//! estimator. Callers implement [`Objective`] and invoke [`minimize`] to run
//! L-BFGS with a configurable line search, tolerances, and finite-difference
//! gradients.
//!
//! Key behaviors
//! -------------
//! - Bridge an [`Objective`] into Argmin's `CostFunction`/`Gradient` via
//!   [`adapter::ArgMinAdapter`] (no sign flip).
//! - [`minimize`] validates the initial guess with [`Objective::check`],
//!   selects a solver via [`builders`], executes it via [`run::run_lbfgs`],
//!   and normalizes results into an [`OptimOutcome`].
//! - [`finite_diff`] supplies central/forward gradients with error capture
//!   when no analytic gradient exists.
//! - [`Tolerances`] and [`OptimOptions`] are validated on construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer is unconstrained. Objectives defined on a subset of ℝᵏ
//!   handle out-of-domain points themselves (penalty or non-finite value).
//! - A non-finite objective value aborts the run with
//!   [`OptError::NonFiniteCost`](crate::optimization::errors::OptError).
//! - Solver non-convergence is *not* an error: it is reported through the
//!   flags on [`OptimOutcome`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover adapter passthrough and FD fallback,
//!   solver construction, option validation, and outcome flags.
//! - `api` tests minimize a quadratic bowl end to end; the SMD objective is
//!   exercised in `tests/integration_smd_pipeline.rs`.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::traits::{LineSearcher, Objective, OptimOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use labor_smd::optimization::objective_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{LineSearcher, Objective, OptimOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
