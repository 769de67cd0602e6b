//! labor_smd — simulated minimum distance estimation of a Cobb–Douglas
//! labor-supply model, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the estimator to Python via the `_labor_smd` extension module.
//!
//! Key behaviors
//! -------------
//! - [`structural`]: parameters θ = (γ, τ, σ) and the closed-form choices
//!   `c(w, ε)`, `l(w, ε)`.
//! - [`moments`]: the moment function `(corr(w, c), mean(l), var(c))` and
//!   the squared distance between moment vectors.
//! - [`simulation`]: seeded shock source, synthetic data generation, and
//!   the validated [`LaborData`](simulation::LaborData) container.
//! - [`optimization`]: Argmin-backed L-BFGS minimizer with finite-difference
//!   gradients, and the crate-wide error surface.
//! - [`estimation`]: the SMD objective, options, estimator, and report.
//! - With `python-bindings`: `#[pyclass]` wrappers and the `#[pymodule]`
//!   initializer.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; the binding layer only
//!   converts inputs, dispatches, and maps errors.
//! - Library code performs no I/O apart from the optional `obs_slog`
//!   optimizer progress output.
//!
//! Conventions
//! -----------
//! - θ is ordered `(γ, τ, σ)` everywhere, including the Python surface.
//! - Errors are rich Rust enums internally and become `ValueError` at the
//!   PyO3 boundary.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; the end-to-end pipeline is
//!   covered by `tests/integration_smd_pipeline.rs`.

pub mod estimation;
pub mod moments;
pub mod optimization;
pub mod simulation;
pub mod structural;
#[cfg(feature = "python-bindings")]
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    estimation::estimator::SMDEstimator,
    moments::moment_fn::{CobbDouglasMoments, MomentFunction},
    optimization::{errors::OptError, objective_optimizer::OptimOutcome},
    structural::params::ModelParams,
    utils::{build_smd_options, extract_labor_data, extract_owned},
};

/// SMD — Python-facing wrapper for [`SMDEstimator`].
///
/// Constructed as `SMD(n_obs, replications=100, shock_seed=42, ...)`; the
/// keyword arguments map one-to-one onto [`SMDOptions`](estimation::SMDOptions)
/// and the optimizer tolerances. `fit` copies the three series into a
/// validated [`LaborData`](simulation::LaborData) and runs the estimator.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "labor_smd.estimation", unsendable)]
pub struct SMD {
    pub inner: SMDEstimator,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SMD {
    #[new]
    #[pyo3(
        signature = (
            n_obs,
            replications = None,
            shock_seed = None,
            shock_policy = None,
            invalid_region = None,
            penalty_base = None,
            tol_grad = None,
            tol_cost = None,
            max_iter = None,
            line_searcher = None,
            lbfgs_mem = None,
            verbose = None,
        ),
        text_signature = "(n_obs, /, replications=100, shock_seed=42, \
                          shock_policy='crn', invalid_region='penalty', penalty_base=1e6, \
                          tol_grad=1e-10, tol_cost=1e-16, max_iter=500, \
                          line_searcher='MoreThuente', lbfgs_mem=None, verbose=False)"
    )]
    pub fn new(
        n_obs: usize, replications: Option<usize>, shock_seed: Option<u64>,
        shock_policy: Option<&str>, invalid_region: Option<&str>, penalty_base: Option<f64>,
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
        line_searcher: Option<&str>, lbfgs_mem: Option<usize>, verbose: Option<bool>,
    ) -> PyResult<Self> {
        let options = build_smd_options(
            replications,
            shock_seed,
            shock_policy,
            invalid_region,
            penalty_base,
            tol_grad,
            tol_cost,
            max_iter,
            line_searcher,
            lbfgs_mem,
            verbose,
        )?;
        Ok(SMD { inner: SMDEstimator::new(options, n_obs) })
    }

    #[pyo3(
        signature = (wage, consumption, leisure, theta0),
        text_signature = "(self, wage, consumption, leisure, theta0, /)"
    )]
    pub fn fit<'py>(
        &mut self, py: Python<'py>, wage: &Bound<'py, PyAny>, consumption: &Bound<'py, PyAny>,
        leisure: &Bound<'py, PyAny>, theta0: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        let data = extract_labor_data(py, wage, consumption, leisure)?;
        let theta0 = extract_owned(py, theta0, "theta0")?;
        self.inner.fit(theta0, &data)?;
        Ok(())
    }

    #[getter]
    pub fn results(&self) -> PyResult<SMDOptimOutcome> {
        match &self.inner.results {
            Some(outcome) => Ok(SMDOptimOutcome { inner: outcome.clone() }),
            None => Err(OptError::ModelNotFitted.into()),
        }
    }

    #[getter]
    pub fn fitted_params(&self) -> PyResult<SMDFittedParams> {
        match self.inner.fitted_params {
            Some(params) => Ok(SMDFittedParams { inner: params }),
            None => Err(OptError::ModelNotFitted.into()),
        }
    }
}

/// Read-only view of the optimizer diagnostics of the last fit.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "labor_smd.estimation")]
pub struct SMDOptimOutcome {
    pub inner: OptimOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SMDOptimOutcome {
    #[getter]
    pub fn theta_hat(&self) -> Vec<f64> {
        self.inner.theta_hat.to_vec()
    }

    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn grad_norm(&self) -> Option<f64> {
        self.inner.grad_norm
    }

    #[getter]
    pub fn fn_evals(&self) -> Vec<(String, u64)> {
        self.inner.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }
}

/// Fitted structural parameters.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "labor_smd.estimation")]
pub struct SMDFittedParams {
    pub inner: ModelParams,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SMDFittedParams {
    #[getter]
    pub fn gamma(&self) -> f64 {
        self.inner.gamma
    }

    #[getter]
    pub fn tau(&self) -> f64 {
        self.inner.tau
    }

    #[getter]
    pub fn sigma(&self) -> f64 {
        self.inner.sigma
    }
}

/// `moments(wage, consumption, leisure)` → `[corr(w, c), mean(l), var(c)]`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "moments", signature = (wage, consumption, leisure))]
pub fn py_moments<'py>(
    py: Python<'py>, wage: &Bound<'py, PyAny>, consumption: &Bound<'py, PyAny>,
    leisure: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    let w = extract_owned(py, wage, "wage")?;
    let c = extract_owned(py, consumption, "consumption")?;
    let l = extract_owned(py, leisure, "leisure")?;
    let m = CobbDouglasMoments.moments(w.view(), c.view(), l.view())?;
    Ok(m.to_vec())
}

/// _labor_smd — PyO3 module initializer.
///
/// Registers the `estimation` submodule and makes it importable as
/// `labor_smd.estimation` through `sys.modules`.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _labor_smd<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let estimation_mod = PyModule::new(py, "estimation")?;
    estimation_mod.add_class::<SMD>()?;
    estimation_mod.add_class::<SMDOptimOutcome>()?;
    estimation_mod.add_class::<SMDFittedParams>()?;
    estimation_mod.add_function(wrap_pyfunction!(py_moments, &estimation_mod)?)?;
    m.add_submodule(&estimation_mod)?;

    py.import("sys")?.getattr("modules")?.set_item("labor_smd.estimation", estimation_mod)?;
    Ok(())
}
