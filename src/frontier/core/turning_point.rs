//! core::turning_point — one corner of the piecewise-linear efficient frontier.
//!
//! Purpose
//! -------
//! Hold the full state of a frontier corner: the free set, the complete
//! weight vector, and the Lagrange multipliers at which the corner was
//! reached. Between consecutive corners the optimal weights are exactly
//! linear in the interpolation parameter, which is what the sampling and
//! search layers rely on.
//!
//! Conventions
//! -----------
//! - The starting corner produced before any structural step carries
//!   `lambda = None` and `gamma = None`: no multiplier was solved for, and
//!   an absent multiplier loses every comparison the engine makes.
//! - `free` is stored in the engine's discovery order, not sorted.
use ndarray::Array1;

/// A corner portfolio of the efficient frontier.
#[derive(Debug, Clone, PartialEq)]
pub struct TurningPoint {
    /// Indices of assets strictly inside their bounds, in discovery order.
    pub free: Vec<usize>,
    /// Full weight vector over all assets.
    pub weights: Array1<f64>,
    /// Mean-return multiplier at the corner; `None` for the starting corner.
    pub lambda: Option<f64>,
    /// Budget multiplier at the corner; `None` for the starting corner.
    pub gamma: Option<f64>,
}

impl TurningPoint {
    /// Expected return of the corner portfolio under `mean`.
    pub fn expected_return(&self, mean: &Array1<f64>) -> f64 { self.weights.dot(mean) }

    /// Variance of the corner portfolio under `covar`.
    pub fn variance(&self, covar: &ndarray::Array2<f64>) -> f64 {
        self.weights.dot(&covar.dot(&self.weights))
    }
}
