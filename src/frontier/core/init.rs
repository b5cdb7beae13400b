//! core::init — maximum-return corner portfolio.
//!
//! Purpose
//! -------
//! Build the first feasible turning point: every asset starts at its lower
//! bound, then assets are raised to their upper bound in descending order of
//! expected return until the budget of 1 is reached. The asset whose raise
//! crosses the budget is only partially raised and becomes the sole initial
//! free index.
//!
//! Key behaviors
//! -------------
//! - Sort asset indices descending by expected return, with ties broken by
//!   ascending original index, so the raise order is deterministic.
//! - Detect infeasible bounds (`sum(lower) > 1` or `sum(upper) < 1`) and
//!   report them as a fatal configuration error; never produce an
//!   out-of-budget vector silently.
//!
//! Invariants & assumptions
//! ------------------------
//! - On success, the returned weights sum to exactly 1 up to floating error,
//!   every non-free weight sits exactly on a bound, and the free set is a
//!   singleton.
//! - The degenerate-mean guard in `FrontierProblem::new` has already broken
//!   exact uniform-return ties, so the descending sort has a well-defined
//!   leader; residual pairwise ties fall back to index order.
//! - If the lower bounds already sum to exactly 1, nothing is raised and the
//!   highest-return asset is designated the free singleton at its lower
//!   bound.
use crate::frontier::core::problem::FrontierProblem;
use crate::frontier::errors::{FrontierError, FrontierResult};
use ndarray::Array1;

/// Compute the maximum-expected-return corner portfolio.
///
/// Parameters
/// ----------
/// - `problem`: `&FrontierProblem`
///   Validated problem instance.
///
/// Returns
/// -------
/// `FrontierResult<(Vec<usize>, Array1<f64>)>`
///   The singleton free set and the full weight vector of the first turning
///   point.
///
/// Errors
/// ------
/// - `FrontierError::InfeasibleBounds`
///   When `sum(lower) > 1` (the budget is overshot before raising anything)
///   or `sum(upper) < 1` (raising every asset still cannot reach the
///   budget).
///
/// Notes
/// -----
/// - The crossing asset's weight is pulled back by the overshoot so the
///   total is exactly 1; it therefore lies strictly between its bounds
///   whenever the crossing raise overshoots.
pub fn init_corner_portfolio(problem: &FrontierProblem) -> FrontierResult<(Vec<usize>, Array1<f64>)> {
    let lower = problem.lower();
    let upper = problem.upper();
    let mean = problem.mean();

    let lower_sum: f64 = lower.sum();
    let upper_sum: f64 = upper.sum();
    if lower_sum > 1.0 || upper_sum < 1.0 {
        return Err(FrontierError::InfeasibleBounds { lower_sum, upper_sum });
    }

    let mut order: Vec<usize> = (0..problem.n_assets()).collect();
    order.sort_by(|&a, &b| {
        mean[b].partial_cmp(&mean[a]).unwrap_or(std::cmp::Ordering::Equal).then(a.cmp(&b))
    });

    let mut weights = lower.clone();
    let mut total = lower_sum;
    // Fallback covers the exact sum(lower) == 1 corner, where nothing is raised.
    let mut free_index = order[0];
    for &asset in &order {
        if total >= 1.0 {
            break;
        }
        total += upper[asset] - weights[asset];
        weights[asset] = upper[asset];
        free_index = asset;
    }
    weights[free_index] += 1.0 - total;

    Ok((vec![free_index], weights))
}
