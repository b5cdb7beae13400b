//! core::purge — post-solve cleanup of the turning-point sequence.
//!
//! Purpose
//! -------
//! Remove corners the closed-form recursion produced but that a clean
//! frontier should not expose: corners whose weights drifted outside the
//! box by more than a tolerance (numerical error near a singular block),
//! and corners dominated on the mean axis by a later corner.
//!
//! Key behaviors
//! -------------
//! - Bound purge: a corner survives only if every weight lies inside
//!   `[lower - tol, upper + tol]`.
//! - Dominance purge: scanning from the minimum-variance end, a corner is
//!   dropped when its expected return is strictly below the running maximum
//!   over all later corners. Equal returns survive, which keeps the
//!   starting corner next to the first structural corner it coincides
//!   with. The surviving sequence is non-increasing in expected return.
//! - Both filters rebuild the sequence instead of deleting in place, so no
//!   index arithmetic survives a removal.
//!
//! Conventions
//! -----------
//! - Input order is the engine's order: highest expected return first,
//!   minimum-variance corner last. The dominance scan depends on it.
use ndarray::Array1;

use crate::frontier::core::turning_point::TurningPoint;

/// Drop corners whose weights violate the box by more than `tol`.
pub fn purge_bound_violations(
    points: Vec<TurningPoint>, lower: &Array1<f64>, upper: &Array1<f64>, tol: f64,
) -> Vec<TurningPoint> {
    points
        .into_iter()
        .filter(|point| {
            point
                .weights
                .iter()
                .zip(lower.iter().zip(upper.iter()))
                .all(|(&w, (&lo, &hi))| w - lo >= -tol && w - hi <= tol)
        })
        .collect()
}

/// Drop corners dominated on the mean axis by any later corner.
///
/// Notes
/// -----
/// - Works backward with a running suffix maximum, so a corner dominated by
///   a non-adjacent successor is removed too. The minimum-variance corner
///   always survives.
pub fn purge_dominated(points: Vec<TurningPoint>, mean: &Array1<f64>) -> Vec<TurningPoint> {
    if points.is_empty() {
        return points;
    }
    let returns: Vec<f64> = points.iter().map(|p| p.expected_return(mean)).collect();
    let mut keep = vec![false; points.len()];
    let last = points.len() - 1;
    keep[last] = true;
    let mut suffix_max = returns[last];
    for pos in (0..last).rev() {
        if returns[pos] >= suffix_max {
            keep[pos] = true;
            suffix_max = returns[pos];
        }
    }
    points
        .into_iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(point))
        .collect()
}
