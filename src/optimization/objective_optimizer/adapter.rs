//! Adapter that exposes a user [`Objective`] as an `argmin` problem.
//!
//! The objective is minimized as-is: the cost is `Q(θ)` and an analytic
//! gradient, when provided, is passed through after validation. Without one,
//! the cost closure is finite-differenced (see [`fd_gradient`]).
//!
//! Every non-finite cost is recorded in the adapter's `nonfinite` cell, so
//! the runner can tell a line search that gave up on a NaN/∞ trial point
//! apart from an ordinary solver exit.
use crate::optimization::{
    errors::OptError,
    objective_optimizer::{
        finite_diff::fd_gradient,
        traits::Objective,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use std::cell::{Cell, RefCell};

/// Bridges a user [`Objective`] to `argmin`'s `CostFunction` and `Gradient`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
    /// Last non-finite cost seen, if any.
    pub nonfinite: &'a Cell<Option<f64>>,
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over an objective and its data.
    pub fn new(f: &'a F, data: &'a F::Data, nonfinite: &'a Cell<Option<f64>>) -> Self {
        Self { f, data, nonfinite }
    }
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate `Q(θ)`.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the objective's `value`.
    /// - `OptError::NonFiniteCost` if the value is NaN or infinite; the value
    ///   is also stored in `nonfinite`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            self.nonfinite.set(Some(output));
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output)
    }
}

impl<'a, F: Objective> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate `∇Q(θ)`.
    ///
    /// - If the objective implements `grad`, validate and return it.
    /// - On `GradientNotImplemented`, finite-difference the cost, capturing
    ///   the first error raised inside the FD closure.
    ///
    /// # Errors
    /// - Propagates non-`GradientNotImplemented` errors from `grad`.
    /// - Propagates errors from cost evaluations performed during FD.
    /// - Returns validation errors for wrong dimension or non-finite entries.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, theta.len())?;
                Ok(g)
            }
            Err(OptError::GradientNotImplemented) => {
                let closure_err: RefCell<Option<Error>> = RefCell::new(None);
                let cost_func = |theta: &Theta| -> f64 {
                    match self.cost(theta) {
                        Ok(val) => val,
                        Err(e) => {
                            let mut slot = closure_err.borrow_mut();
                            if slot.is_none() {
                                *slot = Some(e);
                            }
                            f64::NAN
                        }
                    }
                };
                Ok(fd_gradient(theta, &cost_func, &closure_err)?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Cost passthrough (no sign flip) and non-finite rejection.
    // - Analytic-gradient passthrough vs finite-difference fallback.
    // -------------------------------------------------------------------------

    struct Bowl {
        analytic: bool,
    }

    impl Objective for Bowl {
        type Data = f64;

        fn value(&self, theta: &Theta, shift: &f64) -> OptResult<Cost> {
            Ok(theta.mapv(|t| (t - shift).powi(2)).sum())
        }

        fn check(&self, _theta: &Theta, _shift: &f64) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, shift: &f64) -> OptResult<Grad> {
            if self.analytic {
                Ok(theta.mapv(|t| 2.0 * (t - shift)))
            } else {
                Err(OptError::GradientNotImplemented)
            }
        }
    }

    struct NanValued;

    impl Objective for NanValued {
        type Data = ();

        fn value(&self, _theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(f64::NAN)
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // The adapter minimizes the objective itself.
    //
    // Given
    // -----
    // - Q(θ) = ‖θ − 1‖² at θ = (2, 0).
    //
    // Expect
    // ------
    // - cost = 2.
    fn cost_is_objective_value() {
        // Arrange
        let model = Bowl { analytic: true };
        let nonfinite = Cell::new(None);
        let adapter = ArgMinAdapter::new(&model, &1.0, &nonfinite);

        // Act
        let c = adapter.cost(&array![2.0, 0.0]).unwrap();

        // Assert
        assert_eq!(c, 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Non-finite objective values are turned into `NonFiniteCost`.
    //
    // Given
    // -----
    // - An objective returning NaN.
    //
    // Expect
    // ------
    // - `cost` errors, the error maps back to `NonFiniteCost`, and the value
    //   is recorded.
    fn nan_cost_is_rejected() {
        // Arrange
        let nonfinite = Cell::new(None);
        let adapter = ArgMinAdapter::new(&NanValued, &(), &nonfinite);

        // Act
        let err = adapter.cost(&array![0.0]).unwrap_err();

        // Assert
        assert!(matches!(OptError::from(err), OptError::NonFiniteCost { .. }));
        assert!(nonfinite.get().is_some_and(f64::is_nan));
    }

    #[test]
    // Purpose
    // -------
    // Analytic and finite-difference gradients agree.
    //
    // Given
    // -----
    // - The same bowl with and without an analytic gradient.
    //
    // Expect
    // ------
    // - Gradients equal up to FD error.
    fn analytic_and_fd_gradients_agree() {
        // Arrange
        let analytic = Bowl { analytic: true };
        let numeric = Bowl { analytic: false };
        let theta = array![0.3, 1.7, -0.4];
        let nonfinite = Cell::new(None);

        // Act
        let g_a = ArgMinAdapter::new(&analytic, &0.5, &nonfinite).gradient(&theta).unwrap();
        let g_n = ArgMinAdapter::new(&numeric, &0.5, &nonfinite).gradient(&theta).unwrap();

        // Assert
        for (a, n) in g_a.iter().zip(g_n.iter()) {
            assert_relative_eq!(*a, *n, epsilon = 1e-6);
        }
    }
}
