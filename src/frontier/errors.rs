//! Errors for the CLA frontier stack (problem validation, solver options,
//! linear-algebra failures, and engine invariants).
//!
//! This module defines the frontier error type, [`FrontierError`], used across
//! the Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Weights, means, and bounds must be **finite**; bounds must satisfy
//!   `lower[i] <= upper[i]` elementwise.
//! - A lambda coefficient of exactly zero ("no crossing") is **not** an
//!   error; it is the `None` arm of the lambda solver's return value.
//! - Singular free-block covariances are fatal for the solve; the engine
//!   performs no retries.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for frontier operations that may produce
/// [`FrontierError`].
pub type FrontierResult<T> = Result<T, FrontierError>;

/// Unified error type for CLA frontier solves.
///
/// Covers problem-instance validation, solver-option checks, numerical
/// failures of the free-block inversion, and engine state violations.
/// Implements `Display`/`Error` and converts to a Python `ValueError` at
/// PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontierError {
    // ---- Problem validation ----
    /// Problem instance has zero assets.
    EmptyProblem,

    /// Covariance matrix is not N x N for a length-N mean vector.
    CovarDimMismatch { mean_len: usize, rows: usize, cols: usize },

    /// A bound vector's length does not match the mean vector.
    BoundsDimMismatch { expected: usize, actual: usize },

    /// An expected return is NaN/±inf.
    NonFiniteMean { index: usize, value: f64 },

    /// A covariance entry is NaN/±inf.
    NonFiniteCovar { row: usize, col: usize, value: f64 },

    /// A bound is NaN/±inf.
    NonFiniteBound { index: usize, value: f64 },

    /// A lower bound exceeds its upper bound.
    BoundOrdering { index: usize, lower: f64, upper: f64 },

    // ---- Feasibility ----
    /// The budget constraint cannot be met by any combination of bounds.
    InfeasibleBounds { lower_sum: f64, upper_sum: f64 },

    // ---- Solver options ----
    /// Maximum iterations must be positive.
    InvalidMaxIter { max_iter: usize },

    /// Bound-violation purge tolerance must be finite and non-negative.
    InvalidBoundTol { value: f64 },

    // ---- Linear algebra ----
    /// A trial or active free-block covariance is not invertible.
    SingularBlock { size: usize },

    // ---- Engine state ----
    /// The defensive iteration cap was reached before the terminal point.
    IterationLimit { max_iter: usize },

    /// The model has not been solved yet.
    NotSolved,
}

impl std::error::Error for FrontierError {}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Problem validation ----
            FrontierError::EmptyProblem => {
                write!(f, "Problem instance must contain at least one asset.")
            }
            FrontierError::CovarDimMismatch { mean_len, rows, cols } => {
                write!(
                    f,
                    "Covariance matrix must be {mean_len}x{mean_len} for a length-{mean_len} mean vector; got {rows}x{cols}"
                )
            }
            FrontierError::BoundsDimMismatch { expected, actual } => {
                write!(f, "Bound vector length mismatch: expected {expected}, got {actual}")
            }
            FrontierError::NonFiniteMean { index, value } => {
                write!(f, "Expected return at index {index} is non-finite: {value}")
            }
            FrontierError::NonFiniteCovar { row, col, value } => {
                write!(f, "Covariance entry at ({row}, {col}) is non-finite: {value}")
            }
            FrontierError::NonFiniteBound { index, value } => {
                write!(f, "Bound at index {index} is non-finite: {value}")
            }
            FrontierError::BoundOrdering { index, lower, upper } => {
                write!(f, "Lower bound at index {index} exceeds upper bound: {lower} > {upper}")
            }
            // ---- Feasibility ----
            FrontierError::InfeasibleBounds { lower_sum, upper_sum } => {
                write!(
                    f,
                    "Bounds cannot satisfy the budget constraint: sum(lower) = {lower_sum}, sum(upper) = {upper_sum}, need sum(lower) <= 1 <= sum(upper)"
                )
            }
            // ---- Solver options ----
            FrontierError::InvalidMaxIter { max_iter } => {
                write!(f, "Maximum iterations must be positive; got {max_iter}")
            }
            FrontierError::InvalidBoundTol { value } => {
                write!(f, "Bound tolerance must be finite and non-negative; got {value}")
            }
            // ---- Linear algebra ----
            FrontierError::SingularBlock { size } => {
                write!(f, "Free-block covariance of size {size}x{size} is singular.")
            }
            // ---- Engine state ----
            FrontierError::IterationLimit { max_iter } => {
                write!(f, "Turning-point search exceeded the iteration cap of {max_iter}.")
            }
            FrontierError::NotSolved => {
                write!(f, "Model hasn't been solved yet.")
            }
        }
    }
}

/// Convert a [`FrontierError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<FrontierError> for PyErr {
    fn from(err: FrontierError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
