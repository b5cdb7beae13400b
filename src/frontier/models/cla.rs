//! models::cla — the critical-line turning-point engine.
//!
//! Purpose
//! -------
//! Drive the full critical-line recursion for a validated problem: start at
//! the highest-return feasible corner, repeatedly decide whether the next
//! structural event pins a free asset to a bound (case A) or releases a
//! bounded asset into the free set (case B), land exactly on the
//! minimum-variance portfolio with `lambda = 0`, and clean the finished
//! sequence with the purge filters.
//!
//! Key behaviors
//! -------------
//! - Case A scans every free asset (when more than one is free) for the
//!   largest boundary-crossing lambda against its own bound pair.
//! - Case B scans every bounded asset, forming the trial free set
//!   `free + {candidate}` and solving for the lambda at which the candidate
//!   would have entered at its current bound weight; a candidate is usable
//!   only if its lambda sits below the previous corner's lambda, which is
//!   what makes lambdas comparable across structurally different trials.
//! - Ties between the two cases go to case A, so the free set never grows
//!   when shrinking is equally good.
//! - When neither case yields a usable non-negative candidate the engine
//!   takes the sole terminal step: `lambda = 0` with the mean zeroed out,
//!   which is the unconstrained minimum-variance solve on the free block.
//!
//! Invariants & assumptions
//! ------------------------
//! - The lambda sequence over appended corners is non-increasing and its
//!   final element is exactly `0`; the starting corner carries no lambda.
//! - The free set changes by exactly one index per structural step.
//! - A singular free block is a fatal error for the solve, never a silent
//!   degradation.
//! - A structural-iteration cap bounds the loop; exceeding it reports
//!   [`FrontierError::IterationLimit`] instead of spinning on a numerical
//!   cycle.
//!
//! Downstream usage
//! ----------------
//! - `analysis::sharpe` and `analysis::sampler` consume the corner sequence
//!   read-only through [`CLAModel::turning_points`].
//!
//! Testing notes
//! -------------
//! - Unit tests here pin the full corner sequence of a hand-traced
//!   identity-covariance problem; the integration tests add feasibility,
//!   monotonicity, and purge properties on larger problems.
use ndarray::Array1;

use crate::frontier::core::{
    Boundary, SolverOptions, TurningPoint, compute_lambda, compute_weights, exceeds,
    free_blocks, init_corner_portfolio, purge_bound_violations, purge_dominated,
};
use crate::frontier::core::matrices::bounded_set;
use crate::frontier::core::problem::FrontierProblem;
use crate::frontier::errors::{FrontierError, FrontierResult};

/// Best candidate found by a case scan.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    lambda: f64,
    asset: usize,
    boundary: f64,
}

/// CLAModel — critical-line solver over one immutable problem instance.
///
/// Owns the problem and options, runs the recursion once via
/// [`CLAModel::solve`], and afterwards serves the purged corner sequence to
/// the analysis layer.
#[derive(Debug, Clone)]
pub struct CLAModel {
    problem: FrontierProblem,
    options: SolverOptions,
    turning_points: Option<Vec<TurningPoint>>,
}

impl CLAModel {
    /// Bundle a validated problem with engine options; no work happens here.
    pub fn new(problem: FrontierProblem, options: SolverOptions) -> Self {
        Self { problem, options, turning_points: None }
    }

    /// The problem this model solves.
    pub fn problem(&self) -> &FrontierProblem { &self.problem }

    /// Run the critical-line recursion and store the purged corner sequence.
    ///
    /// Returns
    /// -------
    /// `FrontierResult<()>`
    ///   `Ok(())` once the sequence is stored; repeated calls re-solve.
    ///
    /// Errors
    /// ------
    /// - [`FrontierError::InfeasibleBounds`]
    ///   The box cannot hold a full-investment portfolio.
    /// - [`FrontierError::SingularBlock`]
    ///   A free-block covariance failed to invert.
    /// - [`FrontierError::IterationLimit`]
    ///   The structural loop exceeded its cap.
    pub fn solve(&mut self) -> FrontierResult<()> {
        let (mut free, mut weights) = init_corner_portfolio(&self.problem)?;
        let mut points = vec![TurningPoint {
            free: free.clone(),
            weights: weights.clone(),
            lambda: None,
            gamma: None,
        }];

        let max_iter = self.options.effective_max_iter(self.problem.n_assets());
        let mut iter = 0usize;
        loop {
            if iter >= max_iter {
                return Err(FrontierError::IterationLimit { max_iter });
            }
            iter += 1;

            let prev_lambda = points[points.len() - 1].lambda;
            let case_a = self.scan_case_a(&free, &weights)?;
            let case_b = self.scan_case_b(&free, &weights, prev_lambda)?;

            let lambda_in = case_a.map(|c| c.lambda);
            let lambda_out = case_b.map(|c| c.lambda);
            let usable =
                |l: Option<f64>| matches!(l, Some(value) if value >= 0.0);
            if !usable(lambda_in) && !usable(lambda_out) {
                // Terminal step: minimum variance, return term dropped.
                let blocks = free_blocks(&self.problem, &free, &weights)?;
                let zero_mean = Array1::<f64>::zeros(blocks.mean_f.len());
                let (w_f, gamma) = compute_weights(
                    &blocks.covar_f_inv,
                    blocks.covar_fb.as_ref(),
                    &zero_mean,
                    blocks.w_b.as_ref(),
                    0.0,
                );
                for (pos, &asset) in free.iter().enumerate() {
                    weights[asset] = w_f[pos];
                }
                points.push(TurningPoint {
                    free: free.clone(),
                    weights: weights.clone(),
                    lambda: Some(0.0),
                    gamma: Some(gamma),
                });
                break;
            }

            // Ties favor case A: case B must strictly exceed to win.
            let lambda = if exceeds(lambda_out, lambda_in) {
                let candidate = case_b.ok_or(FrontierError::NotSolved)?;
                free.push(candidate.asset);
                candidate.lambda
            } else {
                let candidate = case_a.ok_or(FrontierError::NotSolved)?;
                free.retain(|&asset| asset != candidate.asset);
                weights[candidate.asset] = candidate.boundary;
                candidate.lambda
            };

            let blocks = free_blocks(&self.problem, &free, &weights)?;
            let (w_f, gamma) = compute_weights(
                &blocks.covar_f_inv,
                blocks.covar_fb.as_ref(),
                &blocks.mean_f,
                blocks.w_b.as_ref(),
                lambda,
            );
            for (pos, &asset) in free.iter().enumerate() {
                weights[asset] = w_f[pos];
            }
            points.push(TurningPoint {
                free: free.clone(),
                weights: weights.clone(),
                lambda: Some(lambda),
                gamma: Some(gamma),
            });
            if lambda == 0.0 {
                break;
            }
        }

        let points = purge_bound_violations(
            points,
            self.problem.lower(),
            self.problem.upper(),
            self.options.bound_tol(),
        );
        let points = purge_dominated(points, self.problem.mean());
        self.turning_points = Some(points);
        Ok(())
    }

    /// The purged corner sequence.
    ///
    /// Errors
    /// ------
    /// - [`FrontierError::NotSolved`] before a successful [`CLAModel::solve`].
    pub fn turning_points(&self) -> FrontierResult<&[TurningPoint]> {
        self.turning_points.as_deref().ok_or(FrontierError::NotSolved)
    }

    /// Minimum-variance point: risk (standard deviation) and weights.
    ///
    /// Scans the retained sequence for the globally minimal variance rather
    /// than trusting the terminal position, so purge decisions cannot shift
    /// the answer.
    pub fn min_var(&self) -> FrontierResult<(f64, Array1<f64>)> {
        let points = self.turning_points()?;
        let best = points
            .iter()
            .min_by(|a, b| {
                let va = a.variance(self.problem.covar());
                let vb = b.variance(self.problem.covar());
                va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or(FrontierError::NotSolved)?;
        Ok((best.variance(self.problem.covar()).sqrt(), best.weights.clone()))
    }

    /// Case A: largest lambda at which a currently free asset hits a bound.
    fn scan_case_a(
        &self, free: &[usize], weights: &Array1<f64>,
    ) -> FrontierResult<Option<Candidate>> {
        if free.len() <= 1 {
            return Ok(None);
        }
        let blocks = free_blocks(&self.problem, free, weights)?;
        let mut best: Option<Candidate> = None;
        for (pos, &asset) in free.iter().enumerate() {
            let pair = Boundary::Pair {
                lower: self.problem.lower()[asset],
                upper: self.problem.upper()[asset],
            };
            if let Some(crossing) = compute_lambda(
                &blocks.covar_f_inv,
                blocks.covar_fb.as_ref(),
                &blocks.mean_f,
                blocks.w_b.as_ref(),
                pos,
                pair,
            ) {
                if exceeds(Some(crossing.lambda), best.map(|c| c.lambda)) {
                    best = Some(Candidate {
                        lambda: crossing.lambda,
                        asset,
                        boundary: crossing.boundary,
                    });
                }
            }
        }
        Ok(best)
    }

    /// Case B: largest lambda below `prev_lambda` at which a bounded asset
    /// would have entered the free set.
    fn scan_case_b(
        &self, free: &[usize], weights: &Array1<f64>, prev_lambda: Option<f64>,
    ) -> FrontierResult<Option<Candidate>> {
        if free.len() >= self.problem.n_assets() {
            return Ok(None);
        }
        let mut best: Option<Candidate> = None;
        for asset in bounded_set(self.problem.n_assets(), free) {
            let mut trial = free.to_vec();
            trial.push(asset);
            let blocks = free_blocks(&self.problem, &trial, weights)?;
            let pos = trial.len() - 1;
            if let Some(crossing) = compute_lambda(
                &blocks.covar_f_inv,
                blocks.covar_fb.as_ref(),
                &blocks.mean_f,
                blocks.w_b.as_ref(),
                pos,
                Boundary::Value(weights[asset]),
            ) {
                let below_prev = match prev_lambda {
                    Some(prev) => crossing.lambda < prev,
                    None => true,
                };
                if below_prev
                    && exceeds(Some(crossing.lambda), best.map(|c| c.lambda))
                {
                    best = Some(Candidate {
                        lambda: crossing.lambda,
                        asset,
                        boundary: crossing.boundary,
                    });
                }
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The full corner sequence of a hand-traced identity-covariance
    //   problem, including the retained starting corner and terminal step.
    // - The uniform-mean perturbation path and the not-solved guard.
    // - The minimum-variance query.
    //
    // They intentionally DO NOT cover:
    // - Sharpe search and frontier sampling (analysis-layer tests).
    // -------------------------------------------------------------------------

    fn identity_problem() -> FrontierProblem {
        FrontierProblem::new(
            array![0.1, 0.2, 0.15],
            Array2::<f64>::eye(3) * 0.01,
            array![0.0, 0.0, 0.0],
            array![1.0, 1.0, 1.0],
        )
        .expect("valid problem")
    }

    #[test]
    // Purpose
    // -------
    // Pin the entire corner sequence of the hand-traced identity problem.
    //
    // Given
    // -----
    // - mu = [0.1, 0.2, 0.15], covar = 0.01 * I3, box [0, 1] per asset.
    // - Hand trace: start at [0, 1, 0] (free {1}, no multipliers); asset 2
    //   enters at lambda = 0.2; asset 0 enters at lambda = 1/15 with
    //   weights [0, 2/3, 1/3]; terminal lambda = 0 at [1/3, 1/3, 1/3].
    //
    // Expect
    // ------
    // - Exactly four corners matching the trace, lambdas non-increasing and
    //   ending at exactly 0, free set growing by one per step.
    fn solve_reproduces_hand_traced_identity_sequence() {
        // Arrange
        let mut model = CLAModel::new(identity_problem(), SolverOptions::default());

        // Act
        model.solve().expect("solve succeeds");
        let points = model.turning_points().expect("solved");

        // Assert
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].free, vec![1]);
        assert_eq!(points[0].weights, array![0.0, 1.0, 0.0]);
        assert_eq!(points[0].lambda, None);
        assert_eq!(points[0].gamma, None);

        let lambda_1 = points[1].lambda.expect("structural corner");
        assert!((lambda_1 - 0.2).abs() < 1e-12);
        assert_eq!(points[1].free.len(), 2);

        let lambda_2 = points[2].lambda.expect("structural corner");
        assert!((lambda_2 - 1.0 / 15.0).abs() < 1e-12);
        assert!((points[2].weights[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((points[2].weights[2] - 1.0 / 3.0).abs() < 1e-12);

        assert_eq!(points[3].lambda, Some(0.0));
        for asset in 0..3 {
            assert!((points[3].weights[asset] - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Uniform means must solve cleanly via the internal perturbation.
    //
    // Given
    // -----
    // - mu = [0.1, 0.1, 0.1], covar = 0.01 * I3, box [0, 1].
    //
    // Expect
    // ------
    // - Solve succeeds; every retained corner is feasible and sums to one.
    fn solve_handles_uniform_means() {
        // Arrange
        let problem = FrontierProblem::new(
            array![0.1, 0.1, 0.1],
            Array2::<f64>::eye(3) * 0.01,
            array![0.0, 0.0, 0.0],
            array![1.0, 1.0, 1.0],
        )
        .expect("valid problem");
        let mut model = CLAModel::new(problem, SolverOptions::default());

        // Act
        model.solve().expect("solve succeeds");

        // Assert
        for point in model.turning_points().expect("solved") {
            assert!((point.weights.sum() - 1.0).abs() < 1e-9);
            for &w in point.weights.iter() {
                assert!(w >= -1e-9 && w <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Querying results before solving reports NotSolved.
    //
    // Given
    // -----
    // - A freshly constructed model.
    //
    // Expect
    // ------
    // - `turning_points` and `min_var` both return `NotSolved`.
    fn queries_before_solve_report_not_solved() {
        // Arrange
        let model = CLAModel::new(identity_problem(), SolverOptions::default());

        // Act & Assert
        assert!(matches!(model.turning_points(), Err(FrontierError::NotSolved)));
        assert!(matches!(model.min_var(), Err(FrontierError::NotSolved)));
    }

    #[test]
    // Purpose
    // -------
    // The minimum-variance query returns the terminal equal-weight corner
    // of the identity problem.
    //
    // Given
    // -----
    // - The solved identity problem; equal variances make [1/3, 1/3, 1/3]
    //   the global minimum with variance 0.01 / 3.
    //
    // Expect
    // ------
    // - Risk sqrt(0.01 / 3) and equal weights.
    fn min_var_returns_global_minimum() {
        // Arrange
        let mut model = CLAModel::new(identity_problem(), SolverOptions::default());
        model.solve().expect("solve succeeds");

        // Act
        let (risk, weights) = model.min_var().expect("solved");

        // Assert
        assert!((risk - (0.01f64 / 3.0).sqrt()).abs() < 1e-12);
        for asset in 0..3 {
            assert!((weights[asset] - 1.0 / 3.0).abs() < 1e-9);
        }
    }
}
