//! objective_optimizer::finite_diff — finite-difference gradients.
//!
//! Purpose
//! -------
//! Approximate `∇Q(θ)` when an [`Objective`] does not provide an analytic
//! gradient, with error capture and validation, so the adapter never calls
//! the `finitediff` API directly.
//!
//! Key behaviors
//! -------------
//! - [`fd_gradient`] tries central differences first and falls back to
//!   forward differences when a cost evaluation failed or the central
//!   gradient is non-finite.
//! - [`run_fd_diff`] is the forward-difference path on its own.
//!
//! Invariants & assumptions
//! ------------------------
//! - The FD closure must return `f64`, so errors raised inside it are
//!   written to a shared `closure_err` cell and the closure returns `NaN`.
//!   The first captured error wins.
//! - Returned gradients always satisfy [`validate_grad`].
//!
//! Conventions
//! -----------
//! - Differences are taken in the raw optimizer space θ. For the SMD
//!   objective this means a step can leave the admissible box; the
//!   penalty keeps such evaluations finite.
//!
//! [`Objective`]: crate::optimization::objective_optimizer::Objective
use crate::optimization::{
    errors::OptResult,
    objective_optimizer::{
        types::{Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::Error;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// fd_gradient — central-difference gradient with forward fallback.
///
/// Parameters
/// ----------
/// - `theta`: `&Theta`
///   Point at which the gradient is approximated.
/// - `func`: `&G`
///   Scalar objective. Must route evaluation errors into `closure_err` and
///   return `NaN` in that case.
/// - `closure_err`: `&RefCell<Option<Error>>`
///   Shared error slot written by `func`.
///
/// Errors
/// ------
/// - Any error captured in `closure_err` during the forward pass.
/// - `OptError::InvalidGradient` / `GradientDimMismatch` when the forward
///   gradient fails validation.
pub fn fd_gradient<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let central = theta.central_diff(func);
    if closure_err.borrow().is_some() {
        return run_fd_diff(theta, func, closure_err);
    }
    match validate_grad(&central, theta.len()) {
        Ok(()) => Ok(central),
        Err(_) => run_fd_diff(theta, func, closure_err),
    }
}

/// run_fd_diff — forward-difference gradient with error capture and validation.
///
/// Clears `closure_err`, runs `forward_diff`, returns any captured error,
/// and otherwise validates the result.
pub fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}
