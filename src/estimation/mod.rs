//! estimation — simulated minimum distance for the labor-supply model.
//!
//! Purpose
//! -------
//! Tie together the structural model, the moment function, the shock source,
//! and the L-BFGS minimizer into a single estimator of θ = (γ, τ, σ).
//!
//! Key behaviors
//! -------------
//! - [`options`]: [`SMDOptions`] and the [`InvalidRegion`] policy.
//! - [`objective`]: [`SMDObjective`] and [`SMDTargets`]; implements
//!   [`Objective`](crate::optimization::objective_optimizer::Objective).
//! - [`estimator`]: [`SMDEstimator`] with `fit`, `objective_at`,
//!   `simulated_moments`, and `report`.
//! - [`report`]: printable [`EstimationReport`].
//!
//! Conventions
//! -----------
//! - θ is always ordered `(γ, τ, σ)`.
//! - Errors surface as [`OptError`](crate::optimization::errors::OptError);
//!   model-level failures arrive wrapped in `OptError::Model`.

pub mod estimator;
pub mod objective;
pub mod options;
pub mod report;

pub use self::estimator::SMDEstimator;
pub use self::objective::{SMDObjective, SMDScratch, SMDTargets};
pub use self::options::{DEFAULT_PENALTY_BASE, DEFAULT_REPLICATIONS, InvalidRegion, SMDOptions};
pub use self::report::EstimationReport;
