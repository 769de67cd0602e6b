//! High-level entry point for minimizing a user-provided [`Objective`].
//!
//! Selects an L-BFGS solver with either Hager–Zhang or More–Thuente line
//! search, wraps the objective in an [`ArgMinAdapter`], and delegates the run
//! to [`run_lbfgs`].
use crate::optimization::{
    errors::OptResult,
    objective_optimizer::{
        adapter::ArgMinAdapter,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_lbfgs,
        traits::{LineSearcher, Objective, OptimOptions, OptimOutcome},
        types::Theta,
    },
};
use std::cell::Cell;

/// Minimize an objective `Q(θ)` using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Builds an L-BFGS solver per `opts.line_searcher`.
/// - Runs it through [`run_lbfgs`], which applies the iteration cap and
///   optional observers.
///
/// No constraints are imposed on θ; objectives with a restricted domain
/// must price or reject out-of-domain points themselves.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_*`.
/// - Propagates runtime errors from `run_lbfgs` (e.g., line search failures).
/// - [`OptError::NonFiniteCost`](crate::optimization::errors::OptError) when
///   the run ends because the objective returned NaN/∞ at a trial point.
///
/// # Example
/// ```no_run
/// use labor_smd::optimization::{
///     errors::OptResult,
///     objective_optimizer::{Objective, OptimOptions, Theta, minimize},
/// };
/// use ndarray::array;
///
/// struct Bowl;
/// impl Objective for Bowl {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(theta.dot(theta))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = minimize(&Bowl, array![0.1, -0.2, 0.3], &(), &OptimOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), labor_smd::optimization::errors::OptError>(())
/// ```
pub fn minimize<F: Objective>(
    f: &F, theta0: Theta, data: &F::Data, opts: &OptimOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let nonfinite = Cell::new(None);
    let problem = ArgMinAdapter::new(f, data, &nonfinite);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}
