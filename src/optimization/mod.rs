//! optimization — minimization stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide the numerical optimization layer used by the SMD estimator: an
//! Argmin-backed L-BFGS minimizer with finite-difference gradients, and a
//! single error/result surface for everything above the model layer.
//!
//! Key behaviors
//! -------------
//! - [`objective_optimizer`]: the [`Objective`](objective_optimizer::Objective)
//!   trait, option structs, and [`minimize`](objective_optimizer::minimize).
//! - [`errors`]: [`OptError`](errors::OptError) / `OptResult<T>`, including
//!   conversions from `argmin::core::Error` and from
//!   [`ModelError`](crate::structural::errors::ModelError).
//!
//! Conventions
//! -----------
//! - Public optimization entry points that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors.
//! - This module performs no I/O except the optional `obs_slog` progress
//!   output enabled through `OptimOptions::verbose`.

pub mod errors;
pub mod objective_optimizer;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use labor_smd::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::objective_optimizer::prelude::*;
}
