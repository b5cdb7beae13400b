//! core::weights — free-asset weights and budget multiplier at a given lambda.
//!
//! Purpose
//! -------
//! Reconstruct the optimal free-asset weights for a fixed free set once the
//! mean-return multiplier lambda is known, together with the budget
//! multiplier gamma enforcing the full-investment constraint. The engine
//! calls this after every structural change of the free set, and once more
//! with `lambda = 0` to land exactly on the minimum-variance portfolio.
//!
//! Key behaviors
//! -------------
//! - Compute `gamma` from the first-order conditions restricted to the free
//!   block, folding in the bounded assets' budget consumption and covariance
//!   coupling when any exist.
//! - Return only the free-block weights, ordered like the caller's free set;
//!   scattering them back into the full vector is the engine's job.
//!
//! Invariants & assumptions
//! ------------------------
//! - `covar_f_inv`, `mean_f`, and (when present) `covar_fb`/`w_b` describe
//!   the same free/bounded split, in the same order.
//! - By construction the returned weights satisfy the budget identity:
//!   free weights plus bounded weights sum to one up to rounding error.
use ndarray::{Array1, Array2};

/// Solve for the free-block weights and the budget multiplier at `lambda`.
///
/// Parameters
/// ----------
/// - `covar_f_inv`: `&Array2<f64>`
///   Inverse of the free-block covariance.
/// - `covar_fb`: `Option<&Array2<f64>>`
///   Cross-covariance between free rows and bounded columns; `None` when no
///   asset is bounded.
/// - `mean_f`: `&Array1<f64>`
///   Free-asset expected returns.
/// - `w_b`: `Option<&Array1<f64>>`
///   Bounded-asset weights; `None` when no asset is bounded.
/// - `lambda`: `f64`
///   Mean-return multiplier to evaluate at.
///
/// Returns
/// -------
/// `(Array1<f64>, f64)`
///   The free-block weights and the budget multiplier gamma.
pub fn compute_weights(
    covar_f_inv: &Array2<f64>, covar_fb: Option<&Array2<f64>>, mean_f: &Array1<f64>,
    w_b: Option<&Array1<f64>>, lambda: f64,
) -> (Array1<f64>, f64) {
    let ones = Array1::<f64>::ones(mean_f.len());
    let inv_mu = covar_f_inv.dot(mean_f);
    let inv_ones = covar_f_inv.dot(&ones);
    let g1: f64 = inv_mu.sum();
    let g2: f64 = inv_ones.sum();

    match (covar_fb, w_b) {
        (Some(covar_fb), Some(w_b)) => {
            let g3: f64 = w_b.sum();
            let w1 = covar_f_inv.dot(&covar_fb.dot(w_b));
            let g4: f64 = w1.sum();
            let gamma = -lambda * g1 / g2 + (1.0 - g3 + g4) / g2;
            let w_f = -w1 + gamma * &inv_ones + lambda * &inv_mu;
            (w_f, gamma)
        }
        _ => {
            let gamma = -lambda * g1 / g2 + 1.0 / g2;
            let w_f = gamma * &inv_ones + lambda * &inv_mu;
            (w_f, gamma)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Hand-computed weights on diagonal blocks, with and without a bounded
    //   block.
    // - The lambda = 0 minimum-variance reduction and the budget identity.
    //
    // They intentionally DO NOT cover:
    // - Free/bounded splits of real solved problems (engine tests do that).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the all-free weights against a hand computation at a nonzero
    // lambda.
    //
    // Given
    // -----
    // - covar_f = 0.01 * I2, mean_f = [0.2, 0.15], lambda = 0.05.
    //
    // Expect
    // ------
    // - Weights sum to one and satisfy the first-order conditions
    //   S w = lambda * mu + gamma * 1 on the free block.
    fn compute_weights_all_free_satisfies_first_order_conditions() {
        // Arrange
        let covar_f_inv = array![[100.0, 0.0], [0.0, 100.0]];
        let mean_f = array![0.2, 0.15];
        let lambda = 0.05;

        // Act
        let (w_f, gamma) = compute_weights(&covar_f_inv, None, &mean_f, None, lambda);

        // Assert
        assert!((w_f.sum() - 1.0).abs() < 1e-12);
        for pos in 0..2 {
            let lhs = 0.01 * w_f[pos];
            let rhs = lambda * mean_f[pos] + gamma;
            assert!((lhs - rhs).abs() < 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that lambda = 0 on an identity-scaled block yields the
    // equal-weight minimum-variance portfolio.
    //
    // Given
    // -----
    // - covar_f = 0.01 * I3, lambda = 0.
    //
    // Expect
    // ------
    // - w = [1/3, 1/3, 1/3] and gamma = 1/300.
    fn compute_weights_at_zero_lambda_is_minimum_variance() {
        // Arrange
        let covar_f_inv = array![[100.0, 0.0, 0.0], [0.0, 100.0, 0.0], [0.0, 0.0, 100.0]];
        let mean_f = array![0.2, 0.15, 0.1];

        // Act
        let (w_f, gamma) = compute_weights(&covar_f_inv, None, &mean_f, None, 0.0);

        // Assert
        for pos in 0..3 {
            assert!((w_f[pos] - 1.0 / 3.0).abs() < 1e-12);
        }
        assert!((gamma - 1.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the budget identity when a bounded block consumes part of the
    // budget.
    //
    // Given
    // -----
    // - covar_f = 0.01 * I2 with one bounded asset at weight 0.4 and zero
    //   cross-covariance, lambda = 0.
    //
    // Expect
    // ------
    // - Free weights sum to 0.6, split equally by symmetry.
    fn compute_weights_folds_in_bounded_budget() {
        // Arrange
        let covar_f_inv = array![[100.0, 0.0], [0.0, 100.0]];
        let mean_f = array![0.2, 0.15];
        let covar_fb = array![[0.0], [0.0]];
        let w_b = array![0.4];

        // Act
        let (w_f, _) =
            compute_weights(&covar_f_inv, Some(&covar_fb), &mean_f, Some(&w_b), 0.0);

        // Assert
        assert!((w_f.sum() - 0.6).abs() < 1e-12);
        assert!((w_f[0] - 0.3).abs() < 1e-12);
        assert!((w_f[1] - 0.3).abs() < 1e-12);
    }
}
