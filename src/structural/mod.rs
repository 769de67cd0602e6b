//! structural — closed-form Cobb-Douglas labor-supply model.
//!
//! Purpose
//! -------
//! Hold everything that describes the economic model itself: the validated
//! parameter record θ = (γ, τ, σ), the closed-form consumption and leisure
//! choices, and the model-layer error type.
//!
//! Key behaviors
//! -------------
//! - [`params`]: [`ModelParams`] with construction-time validation
//!   (`γ ∈ [0, 1]`, `τ ∈ [0, 1)`, `σ ≥ 0`), θ-vector conversions, and the
//!   box-violation measure used by the objective's penalty.
//! - [`labor_supply`]: pure scalar evaluators and an in-place panel solver
//!   over the replicated `n × S` layout.
//! - [`errors`]: [`ModelError`] / [`ModelResult`] shared by the structural,
//!   moments, and simulation layers.
//!
//! Conventions
//! -----------
//! - Optimizer vectors are ordered `(γ, τ, σ)`.
//! - This module never draws random numbers; shocks are supplied by the
//!   caller (see `simulation::shocks`).

pub mod errors;
pub mod labor_supply;
pub mod params;

pub use self::errors::{ModelError, ModelResult};
pub use self::labor_supply::{consumption, leisure, solve_into};
pub use self::params::{ModelParams, N_PARAMS, TAU_MARGIN, feasibility_violation};
