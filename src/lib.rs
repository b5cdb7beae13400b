//! rust_frontier — critical-line efficient-frontier solver with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the critical-line solver to Python via the `_rust_frontier` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes and submodules used by the `rust_frontier`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`frontier`, `analysis`, `optimization`)
//!   as the public crate surface.
//! - Define the `CLA` `#[pyclass]` wrapper and the `#[pymodule]` initializer
//!   for the `_rust_frontier` Python extension.
//! - Create and register the `frontier_models` Python submodule under
//!   `rust_frontier` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible `CLA` type mirrors
//!   the invariants and signatures of [`CLAModel`].
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_frontier.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rust_frontier` package.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_frontier` module defined
//!   here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the crate-level integration tests; the PyO3 surface is exercised by
//!   smoke tests from Python.

pub mod analysis;
pub mod frontier;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    analysis::{max_sharpe, sample_frontier},
    frontier::models::CLAModel,
    utils::build_frontier_model,
};

/// CLA — Python-facing wrapper for the critical-line frontier solver.
///
/// Purpose
/// -------
/// Expose the [`CLAModel`] API to Python callers while preserving the core
/// Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a validated [`CLAModel`] from Python-friendly array inputs.
/// - Provide `solve`, `min_var`, `max_sharpe`, and `ef_frontier` methods that
///   delegate to the core implementation.
/// - Expose the solved corner sequence (weights, free sets, lambdas, gammas)
///   as copy-on-access properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `CLA(mean, covar, lower, upper, max_iter=None, bound_tol=None)`:
/// - `mean`: array-like of N float64 expected returns.
/// - `covar`: N×N float64 covariance matrix.
/// - `lower`, `upper`: array-like float64 bound vectors of length N.
/// - `max_iter`: `Option<usize>`
///   Structural iteration cap; defaults to one derived from N.
/// - `bound_tol`: `Option<f64>`
///   Bound-violation purge tolerance; defaults to `1e-9`.
///
/// Fields
/// ------
/// - `inner`: [`CLAModel`]
///   Fully configured solver owning the problem and, after `solve`, the
///   corner sequence.
///
/// Invariants
/// ----------
/// - `inner` always holds a validated problem; result queries before `solve`
///   raise `ValueError` rather than returning partial data.
///
/// Notes
/// -----
/// - Native Rust callers should use [`CLAModel`] directly; this type exists
///   solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_frontier.frontier_models")]
pub struct CLA {
    /// Underlying Rust CLAModel.
    pub inner: CLAModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl CLA {
    #[new]
    #[pyo3(
        signature = (
            mean,
            covar,
            lower,
            upper,
            max_iter = None,
            bound_tol = None,
        ),
        text_signature = "(mean, covar, lower, upper, /, max_iter=None, bound_tol=None)"
    )]
    pub fn cla<'py>(
        py: Python<'py>, mean: &Bound<'py, PyAny>, covar: &Bound<'py, PyAny>,
        lower: &Bound<'py, PyAny>, upper: &Bound<'py, PyAny>, max_iter: Option<usize>,
        bound_tol: Option<f64>,
    ) -> PyResult<Self> {
        let inner = build_frontier_model(py, mean, covar, lower, upper, max_iter, bound_tol)?;
        Ok(CLA { inner })
    }

    /// Run the critical-line recursion; results become available afterwards.
    pub fn solve(&mut self) -> PyResult<()> {
        self.inner.solve()?;
        Ok(())
    }

    /// Minimum-variance point as `(risk, weights)`.
    pub fn min_var(&self) -> PyResult<(f64, Vec<f64>)> {
        let (risk, weights) = self.inner.min_var()?;
        Ok((risk, weights.to_vec()))
    }

    /// Maximum-Sharpe point as `(ratio, weights)`.
    pub fn max_sharpe(&self) -> PyResult<(f64, Vec<f64>)> {
        let point = max_sharpe(&self.inner)?;
        Ok((point.ratio, point.weights.to_vec()))
    }

    /// Discretized frontier as `(means, risks, weights)`.
    #[pyo3(text_signature = "(self, points, /)")]
    pub fn ef_frontier(&self, points: usize) -> PyResult<(Vec<f64>, Vec<f64>, Vec<Vec<f64>>)> {
        let samples = sample_frontier(&self.inner, points)?;
        let weights = samples.weights.into_iter().map(|w| w.to_vec()).collect();
        Ok((samples.means, samples.risks, weights))
    }

    #[getter]
    pub fn weights(&self) -> PyResult<Vec<Vec<f64>>> {
        let points = self.inner.turning_points()?;
        Ok(points.iter().map(|p| p.weights.to_vec()).collect())
    }

    #[getter]
    pub fn free_sets(&self) -> PyResult<Vec<Vec<usize>>> {
        let points = self.inner.turning_points()?;
        Ok(points.iter().map(|p| p.free.clone()).collect())
    }

    #[getter]
    pub fn lambdas(&self) -> PyResult<Vec<Option<f64>>> {
        let points = self.inner.turning_points()?;
        Ok(points.iter().map(|p| p.lambda).collect())
    }

    #[getter]
    pub fn gammas(&self) -> PyResult<Vec<Option<f64>>> {
        let points = self.inner.turning_points()?;
        Ok(points.iter().map(|p| p.gamma).collect())
    }

    /// Expected return of an arbitrary weight vector under the problem mean.
    #[pyo3(text_signature = "(self, weights, /)")]
    pub fn expected_return<'py>(
        &self, py: Python<'py>, weights: &Bound<'py, PyAny>,
    ) -> PyResult<f64> {
        let w = crate::utils::extract_f64_vector(py, weights, "weights")?;
        if w.len() != self.inner.problem().n_assets() {
            return Err(PyValueError::new_err("weights length must match the asset count"));
        }
        Ok(self.inner.problem().expected_return(&w))
    }
}

/// _rust_frontier — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_frontier` Python module and register the submodule used
/// by the public `rust_frontier` package.
///
/// Key behaviors
/// -------------
/// - Create the `frontier_models` submodule and attach it to the parent
///   `_rust_frontier` module.
/// - Register the submodule in `sys.modules` so it is importable via dotted
///   paths from Python.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_frontier<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let frontier_models_mod = PyModule::new(_py, "frontier_models")?;
    frontier_models(_py, m, &frontier_models_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_frontier.frontier_models", frontier_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn frontier_models<'py>(
    _py: Python, rust_frontier: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<CLA>()?;
    rust_frontier.add_submodule(m)?;
    Ok(())
}
