//! sampler — discretized (mean, risk, weights) samples along the frontier.
//!
//! Purpose
//! -------
//! Turn the corner sequence into an evenly discretized frontier: a target
//! sample count is split across the segments, each segment is sampled on a
//! uniform grid of the interpolation parameter, and every sample reports
//! its expected return, risk (standard deviation), and full weight vector.
//!
//! Key behaviors
//! -------------
//! - Samples per segment is `points / corners` (integer division); a count
//!   too small to give every segment at least one sample is rejected.
//! - Every segment contributes its start point; only the last segment also
//!   contributes its end, so shared corners appear exactly once.
//!
//! Conventions
//! -----------
//! - `interpolate(w0, w1, alpha)` is `(1 - alpha) * w0 + alpha * w1`:
//!   `alpha = 0` is the higher-return end of the segment.
use ndarray::Array1;

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::frontier::models::CLAModel;

/// Linear interpolation between two corner weight vectors.
pub fn interpolate(w0: &Array1<f64>, w1: &Array1<f64>, alpha: f64) -> Array1<f64> {
    (1.0 - alpha) * w0 + alpha * w1
}

/// Discretized frontier: parallel per-sample columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierSamples {
    /// Expected return per sample.
    pub means: Vec<f64>,
    /// Standard deviation per sample.
    pub risks: Vec<f64>,
    /// Full weight vector per sample.
    pub weights: Vec<Array1<f64>>,
}

/// Sample the solved frontier at roughly `points` portfolios.
///
/// Parameters
/// ----------
/// - `model`: `&CLAModel`
///   A solved model; the corner sequence is read, never mutated.
/// - `points`: `usize`
///   Target sample count, split evenly across segments.
///
/// Returns
/// -------
/// `AnalysisResult<FrontierSamples>`
///   Samples ordered from the highest-return corner toward minimum
///   variance.
///
/// Errors
/// ------
/// - [`AnalysisError::NotSolved`] before a successful solve.
/// - [`AnalysisError::TooFewTurningPoints`] when fewer than two corners
///   were retained.
/// - [`AnalysisError::InvalidSampleCount`] when `points` divided by the
///   corner count leaves no samples per segment.
pub fn sample_frontier(model: &CLAModel, points: usize) -> AnalysisResult<FrontierSamples> {
    let corners = model.turning_points()?;
    if corners.len() < 2 {
        return Err(AnalysisError::TooFewTurningPoints { found: corners.len() });
    }
    let per_segment = points / corners.len();
    if per_segment == 0 {
        return Err(AnalysisError::InvalidSampleCount {
            points,
            corners: corners.len(),
        });
    }

    let problem = model.problem();
    let mut samples = FrontierSamples {
        means: Vec::with_capacity(points),
        risks: Vec::with_capacity(points),
        weights: Vec::with_capacity(points),
    };
    let segments = corners.len() - 1;
    for (index, segment) in corners.windows(2).enumerate() {
        let (w0, w1) = (&segment[0].weights, &segment[1].weights);
        let last_segment = index == segments - 1;
        for step in 0..per_segment {
            // Interior segments skip alpha = 1: the shared corner belongs
            // to the next segment's grid.
            if !last_segment && per_segment > 1 && step == per_segment - 1 {
                break;
            }
            let alpha = if per_segment == 1 {
                0.0
            } else {
                step as f64 / (per_segment - 1) as f64
            };
            let w = interpolate(w0, w1, alpha);
            samples.means.push(problem.expected_return(&w));
            samples.risks.push(problem.variance(&w).sqrt());
            samples.weights.push(w);
        }
    }
    Ok(samples)
}
