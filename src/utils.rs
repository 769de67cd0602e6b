//! Conversion helpers for the Python bindings.
//!
//! Turn loosely typed Python arguments (arrays, sequences, optional strings)
//! into validated Rust values. Validation errors surface as `PyValueError`
//! through the `From<ModelError>`/`From<OptError>` conversions.
use ndarray::Array1;
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};
use std::str::FromStr;

use crate::{
    estimation::options::{InvalidRegion, SMDOptions},
    optimization::objective_optimizer::{LineSearcher, OptimOptions, Tolerances},
    simulation::{dataset::LaborData, shocks::ShockPolicy},
};

/// Borrow a contiguous `f64` view of a numpy array, pandas Series, or
/// sequence, copying only when needed.
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy an array-like argument into an owned `Array1<f64>`.
pub fn extract_owned<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(Array1::from(slice.to_vec()))
}

/// Validated [`LaborData`] from three array-likes.
pub fn extract_labor_data<'py>(
    py: Python<'py>, wage: &Bound<'py, PyAny>, consumption: &Bound<'py, PyAny>,
    leisure: &Bound<'py, PyAny>,
) -> PyResult<LaborData> {
    let data = LaborData::new(
        extract_owned(py, wage, "wage")?,
        extract_owned(py, consumption, "consumption")?,
        extract_owned(py, leisure, "leisure")?,
    )?;
    Ok(data)
}

/// Build [`SMDOptions`] from optional Python keyword arguments.
///
/// Missing values fall back to the defaults of [`SMDOptions`] and
/// [`Tolerances`]; `penalty_base` is only read when `invalid_region` is
/// `"penalty"` (or omitted).
pub fn build_smd_options(
    replications: Option<usize>, shock_seed: Option<u64>, shock_policy: Option<&str>,
    invalid_region: Option<&str>, penalty_base: Option<f64>, tol_grad: Option<f64>,
    tol_cost: Option<f64>, max_iter: Option<usize>, line_searcher: Option<&str>,
    lbfgs_mem: Option<usize>, verbose: Option<bool>,
) -> PyResult<SMDOptions> {
    let defaults = SMDOptions::default();
    let default_tols = Tolerances::default();

    let tols = Tolerances::new(
        tol_grad.or(default_tols.tol_grad),
        tol_cost.or(default_tols.tol_cost),
        max_iter.or(default_tols.max_iter),
    )?;
    let ls = match line_searcher {
        Some(name) => LineSearcher::from_str(name)?,
        None => LineSearcher::default(),
    };
    let optim_opts = OptimOptions::new(tols, ls, verbose.unwrap_or(false), lbfgs_mem)?;

    let policy = match shock_policy {
        Some(name) => ShockPolicy::from_str(name)?,
        None => defaults.shock_policy,
    };
    let region = match (InvalidRegion::from_str(invalid_region.unwrap_or("penalty"))?, penalty_base)
    {
        (InvalidRegion::Penalty { .. }, Some(base)) => InvalidRegion::penalty(base)?,
        (region, _) => region,
    };

    let opts = SMDOptions::new(
        replications.unwrap_or(defaults.replications),
        shock_seed.unwrap_or(defaults.shock_seed),
        policy,
        region,
        optim_opts,
    )?;
    Ok(opts)
}
