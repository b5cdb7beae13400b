//! sharpe — maximum-Sharpe-ratio point on the solved frontier.
//!
//! Purpose
//! -------
//! Locate the portfolio with the highest Sharpe ratio on a solved frontier.
//! Each pair of consecutive turning points spans a straight segment in
//! weight space, along which the Sharpe ratio is unimodal, so a
//! golden-section search per segment followed by a global maximum across
//! segments finds the exact optimum.
//!
//! Invariants & assumptions
//! ------------------------
//! - Correct only because weights are linear in the interpolation parameter
//!   within a segment; the solver guarantees this between consecutive
//!   corners.
//! - The risk-free rate is zero; the ratio is `w'mu / sqrt(w' covar w)`.
use ndarray::Array1;

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::analysis::sampler::interpolate;
use crate::frontier::models::CLAModel;
use crate::optimization::{Direction, GoldenSectionConfig, golden_section};

/// Bracket tolerance for the per-segment search.
const SHARPE_TOL: f64 = 1e-9;

/// The maximum-Sharpe portfolio and its ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxSharpePoint {
    /// Attained Sharpe ratio.
    pub ratio: f64,
    /// Portfolio weights at the optimum.
    pub weights: Array1<f64>,
}

/// Find the maximum-Sharpe portfolio on a solved model.
///
/// Parameters
/// ----------
/// - `model`: `&CLAModel`
///   A solved model; the corner sequence is read, never mutated.
///
/// Returns
/// -------
/// `AnalysisResult<MaxSharpePoint>`
///   Global maximum across all per-segment optima.
///
/// Errors
/// ------
/// - [`AnalysisError::NotSolved`] before a successful solve.
/// - [`AnalysisError::TooFewTurningPoints`] when fewer than two corners
///   were retained.
pub fn max_sharpe(model: &CLAModel) -> AnalysisResult<MaxSharpePoint> {
    let points = model.turning_points()?;
    if points.len() < 2 {
        return Err(AnalysisError::TooFewTurningPoints { found: points.len() });
    }
    let problem = model.problem();
    let config = GoldenSectionConfig::new(SHARPE_TOL, Direction::Maximize)?;

    let mut best: Option<MaxSharpePoint> = None;
    for segment in points.windows(2) {
        let (w0, w1) = (&segment[0].weights, &segment[1].weights);
        let objective = |alpha: f64| {
            let w = interpolate(w0, w1, alpha);
            problem.expected_return(&w) / problem.variance(&w).sqrt()
        };
        let outcome = golden_section(objective, 0.0, 1.0, &config)?;
        let improves = match &best {
            Some(incumbent) => outcome.value > incumbent.ratio,
            None => true,
        };
        if improves {
            best = Some(MaxSharpePoint {
                ratio: outcome.value,
                weights: interpolate(w0, w1, outcome.argument),
            });
        }
    }
    // points.len() >= 2 guarantees at least one segment.
    best.ok_or(AnalysisError::TooFewTurningPoints { found: points.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::core::{FrontierProblem, SolverOptions};
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The analytic maximum-Sharpe portfolio of an identity-covariance
    //   problem.
    // - The precondition errors.
    //
    // They intentionally DO NOT cover:
    // - The golden-section mechanics (optimization-layer tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the search against the analytic tangency portfolio.
    //
    // Given
    // -----
    // - mu = [0.1, 0.2, 0.15], covar = 0.01 * I3, box [0, 1]. Unconstrained
    //   tangency weights are proportional to covar^-1 mu, i.e. mu itself:
    //   [2/9, 4/9, 3/9], which is interior to the box. Its Sharpe ratio is
    //   sqrt(mu' covar^-1 mu) = sqrt(7.25).
    //
    // Expect
    // ------
    // - Ratio within 1e-6 of sqrt(7.25) and weights within 1e-4 of the
    //   tangency portfolio.
    fn max_sharpe_matches_analytic_tangency_portfolio() {
        // Arrange
        let problem = FrontierProblem::new(
            array![0.1, 0.2, 0.15],
            Array2::<f64>::eye(3) * 0.01,
            array![0.0, 0.0, 0.0],
            array![1.0, 1.0, 1.0],
        )
        .expect("valid problem");
        let mut model = CLAModel::new(problem, SolverOptions::default());
        model.solve().expect("solve succeeds");

        // Act
        let point = max_sharpe(&model).expect("solved model");

        // Assert
        assert!((point.ratio - 7.25f64.sqrt()).abs() < 1e-6);
        let tangency = [2.0 / 9.0, 4.0 / 9.0, 3.0 / 9.0];
        for (asset, &expected) in tangency.iter().enumerate() {
            assert!((point.weights[asset] - expected).abs() < 1e-4);
        }
    }

    #[test]
    // Purpose
    // -------
    // An unsolved model reports NotSolved.
    //
    // Given
    // -----
    // - A freshly constructed model.
    //
    // Expect
    // ------
    // - `max_sharpe` returns `NotSolved`.
    fn max_sharpe_requires_a_solved_model() {
        // Arrange
        let problem = FrontierProblem::new(
            array![0.1, 0.2],
            Array2::<f64>::eye(2) * 0.01,
            array![0.0, 0.0],
            array![1.0, 1.0],
        )
        .expect("valid problem");
        let model = CLAModel::new(problem, SolverOptions::default());

        // Act & Assert
        assert_eq!(max_sharpe(&model), Err(AnalysisError::NotSolved));
    }
}
