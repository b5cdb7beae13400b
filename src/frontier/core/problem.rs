//! core::problem — validated mean-variance problem instances.
//!
//! Purpose
//! -------
//! Provide the immutable problem container consumed by the turning-point
//! engine: an expected-return vector, an N x N covariance matrix, and
//! per-asset lower/upper weight bounds. Validation happens once at
//! construction so that every downstream routine can assume finite,
//! shape-consistent inputs.
//!
//! Key behaviors
//! -------------
//! - Validate dimensions (square covariance, matching bound lengths),
//!   finiteness of every entry, and elementwise bound ordering.
//! - Apply the degenerate-mean guard: when every expected return is exactly
//!   equal, the last component is perturbed by [`MEAN_PERTURBATION`] so the
//!   descending-return sort used during initialization has a well-defined
//!   leader.
//! - Expose read-only accessors plus portfolio-level return and variance
//!   evaluations used by the purge filters and post-solve queries.
//!
//! Invariants & assumptions
//! ------------------------
//! - The covariance matrix is assumed symmetric positive semi-definite; it
//!   may be ill-conditioned or singular on sub-blocks, which surfaces later
//!   as [`FrontierError::SingularBlock`](crate::frontier::errors::FrontierError)
//!   during the solve, never here.
//! - Budget feasibility (`sum(lower) <= 1 <= sum(upper)`) is checked by the
//!   initializer, not the constructor, so the error points at the solve that
//!   actually needs it.
//! - After construction the instance is immutable for the lifetime of a
//!   solve.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1<f64>` of length N; the covariance is an
//!   `ndarray::Array2<f64>` indexed `[row, col]`.
//! - This module performs no I/O and no logging.
use crate::frontier::errors::{FrontierError, FrontierResult};
use ndarray::{Array1, Array2};

/// Perturbation added to the last expected return when all returns are
/// exactly equal, breaking the tie in the initialization sort.
pub const MEAN_PERTURBATION: f64 = 1e-5;

/// FrontierProblem — immutable input to a CLA solve.
///
/// Purpose
/// -------
/// Bundle the expected-return vector, covariance matrix, and box constraints
/// for a portfolio of N assets, validated once so the engine and the
/// post-solve queries never re-check shapes or finiteness.
///
/// Parameters
/// ----------
/// Constructed via [`FrontierProblem::new`]:
/// - `mean`: `Array1<f64>`
///   Expected returns, length N >= 1, all finite.
/// - `covar`: `Array2<f64>`
///   N x N covariance matrix, all entries finite. Symmetry and positive
///   semi-definiteness are the caller's responsibility.
/// - `lower`, `upper`: `Array1<f64>`
///   Per-asset weight bounds, length N, all finite, `lower[i] <= upper[i]`.
///
/// Invariants
/// ----------
/// - All stored entries are finite and shape-consistent.
/// - If the supplied means were exactly uniform, the stored mean vector has
///   its last component shifted by [`MEAN_PERTURBATION`].
///
/// Notes
/// -----
/// - Accessors return borrows; the engine snapshots weights itself, so no
///   interior mutability is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierProblem {
    mean: Array1<f64>,
    covar: Array2<f64>,
    lower: Array1<f64>,
    upper: Array1<f64>,
}

impl FrontierProblem {
    /// Validate and construct a problem instance.
    ///
    /// Parameters
    /// ----------
    /// - `mean`: `Array1<f64>`
    ///   Expected returns, length N >= 1.
    /// - `covar`: `Array2<f64>`
    ///   N x N covariance matrix.
    /// - `lower`: `Array1<f64>`
    ///   Lower weight bounds, length N.
    /// - `upper`: `Array1<f64>`
    ///   Upper weight bounds, length N.
    ///
    /// Returns
    /// -------
    /// `FrontierResult<FrontierProblem>`
    ///   The validated instance, with the degenerate-mean guard applied.
    ///
    /// Errors
    /// ------
    /// - `FrontierError::EmptyProblem`
    ///   When `mean` is empty.
    /// - `FrontierError::CovarDimMismatch` / `FrontierError::BoundsDimMismatch`
    ///   When shapes disagree with `mean.len()`.
    /// - `FrontierError::NonFiniteMean` / `NonFiniteCovar` / `NonFiniteBound`
    ///   When any entry is NaN or infinite.
    /// - `FrontierError::BoundOrdering`
    ///   When `lower[i] > upper[i]` for some asset.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are surfaced as `FrontierError`.
    pub fn new(
        mean: Array1<f64>, covar: Array2<f64>, lower: Array1<f64>, upper: Array1<f64>,
    ) -> FrontierResult<Self> {
        let n = mean.len();
        if n == 0 {
            return Err(FrontierError::EmptyProblem);
        }
        if covar.nrows() != n || covar.ncols() != n {
            return Err(FrontierError::CovarDimMismatch {
                mean_len: n,
                rows: covar.nrows(),
                cols: covar.ncols(),
            });
        }
        for (bounds, _name) in [(&lower, "lower"), (&upper, "upper")] {
            if bounds.len() != n {
                return Err(FrontierError::BoundsDimMismatch { expected: n, actual: bounds.len() });
            }
        }
        for (index, &value) in mean.iter().enumerate() {
            if !value.is_finite() {
                return Err(FrontierError::NonFiniteMean { index, value });
            }
        }
        for ((row, col), &value) in covar.indexed_iter() {
            if !value.is_finite() {
                return Err(FrontierError::NonFiniteCovar { row, col, value });
            }
        }
        for bounds in [&lower, &upper] {
            for (index, &value) in bounds.iter().enumerate() {
                if !value.is_finite() {
                    return Err(FrontierError::NonFiniteBound { index, value });
                }
            }
        }
        for index in 0..n {
            if lower[index] > upper[index] {
                return Err(FrontierError::BoundOrdering {
                    index,
                    lower: lower[index],
                    upper: upper[index],
                });
            }
        }

        let mut mean = mean;
        if n > 1 && mean.iter().all(|&m| m == mean[0]) {
            // Uniform returns would make the initialization sort arbitrary.
            mean[n - 1] += MEAN_PERTURBATION;
        }

        Ok(FrontierProblem { mean, covar, lower, upper })
    }

    /// Number of assets N.
    pub fn n_assets(&self) -> usize {
        self.mean.len()
    }

    /// Expected-return vector (post degenerate-mean guard).
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Covariance matrix.
    pub fn covar(&self) -> &Array2<f64> {
        &self.covar
    }

    /// Lower weight bounds.
    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    /// Upper weight bounds.
    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    /// Portfolio expected return `w' mu` for a full-length weight vector.
    pub fn expected_return(&self, weights: &Array1<f64>) -> f64 {
        weights.dot(&self.mean)
    }

    /// Portfolio variance `w' Sigma w` for a full-length weight vector.
    pub fn variance(&self, weights: &Array1<f64>) -> f64 {
        weights.dot(&self.covar.dot(weights))
    }
}
