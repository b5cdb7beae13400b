#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::frontier::{
    core::{options::SolverOptions, problem::FrontierProblem},
    models::CLAModel,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
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

#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!(
            "{name} must be a 1-D contiguous float64 array or sequence"
        ))
    })?;
    Ok(Array1::from(slice.to_vec()))
}

#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    // Fallback: a sequence of equal-length float64 rows.
    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(format!(
            "{name} must be a 2-D numpy.ndarray or a sequence of float64 rows"
        ))
    })?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(PyValueError::new_err(format!("{name} rows must have equal length")));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|_| PyValueError::new_err(format!("{name} has an inconsistent shape")))
}

#[cfg(feature = "python-bindings")]
pub fn build_frontier_model<'py>(
    py: Python<'py>, mean: &Bound<'py, PyAny>, covar: &Bound<'py, PyAny>,
    lower: &Bound<'py, PyAny>, upper: &Bound<'py, PyAny>, max_iter: Option<usize>,
    bound_tol: Option<f64>,
) -> PyResult<CLAModel> {
    let mean_vec = extract_f64_vector(py, mean, "mean")?;
    let covar_mat = extract_f64_matrix(py, covar, "covar")?;
    let lower_vec = extract_f64_vector(py, lower, "lower")?;
    let upper_vec = extract_f64_vector(py, upper, "upper")?;

    let problem = FrontierProblem::new(mean_vec, covar_mat, lower_vec, upper_vec)?;

    let tol = bound_tol.unwrap_or(crate::frontier::core::options::DEFAULT_BOUND_TOL);
    let options = SolverOptions::new(max_iter, tol)?;

    Ok(CLAModel::new(problem, options))
}
