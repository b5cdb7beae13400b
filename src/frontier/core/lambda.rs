//! core::lambda — boundary-crossing multiplier for a candidate free set.
//!
//! Purpose
//! -------
//! Compute, in closed form, the value of the mean-return multiplier lambda
//! at which a given asset crosses a weight boundary. The engine uses the
//! same routine in two roles: deciding when a currently free asset must be
//! pinned to a bound (case A) and when a currently bounded asset would
//! profitably enter the free set (case B); the caller selects the role via
//! the [`Boundary`] argument and the target position.
//!
//! Key behaviors
//! -------------
//! - Form the free-block quantities `c1 = 1' S⁻¹ 1`, `c2 = S⁻¹ mu`,
//!   `c3 = 1' S⁻¹ mu`, `c4 = S⁻¹ 1`, and the crossing coefficient
//!   `c = -c1·c2[i] + c3·c4[i]` for the target position `i`.
//! - Return `None` when `c == 0`: the asset never binds at any lambda.
//!   This is the NoCrossing sentinel — a defined non-value, distinct from
//!   zero or negative lambdas, which remain valid comparison inputs.
//! - Resolve a `(lower, upper)` boundary pair by the sign of `c` (lower for
//!   `c < 0`, upper for `c > 0`), encoding the direction the weight would
//!   move to stay feasible.
//! - Incorporate the bounded block's contribution through the
//!   cross-covariance term when bounded assets exist.
//!
//! Conventions
//! -----------
//! - "Absent loses all comparisons": whenever the engine compares candidate
//!   lambdas, an absent value (`None`) loses against every present value.
//!   The rule is spelled out once, in [`exceeds`], instead of leaning on
//!   NaN comparison quirks.
//! - All containers are restricted to the free block and ordered like the
//!   caller's free set; `pos` indexes into that ordering, not into the full
//!   asset universe.
use ndarray::{Array1, Array2};

/// Boundary input to the lambda solver.
///
/// `Value` supplies a literal boundary weight (case B: the candidate's
/// current bound weight). `Pair` supplies both bounds and lets the solver
/// pick by the sign of the crossing coefficient (case A).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// A literal boundary weight.
    Value(f64),
    /// A lower/upper pair resolved by the sign of the crossing coefficient.
    Pair { lower: f64, upper: f64 },
}

/// A resolved boundary crossing: the lambda at which the target asset hits
/// `boundary`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambdaCrossing {
    /// Mean-return multiplier at the crossing.
    pub lambda: f64,
    /// The boundary weight the asset sits on at (and past) the crossing.
    pub boundary: f64,
}

/// Compute the boundary-crossing lambda for one asset of a free block.
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
/// - `pos`: `usize`
///   Position of the target asset within the free ordering.
/// - `boundary`: [`Boundary`]
///   Literal boundary value or a pair to resolve by sign.
///
/// Returns
/// -------
/// `Option<LambdaCrossing>`
///   The crossing lambda and the resolved boundary, or `None` when the
///   crossing coefficient is exactly zero (the asset never binds).
///
/// Notes
/// -----
/// - With no bounded assets the closed form reduces to
///   `lambda = (c4[i] - c1·b) / c`; otherwise the bounded block contributes
///   `lam1 = 1' wB`, `lam3 = S⁻¹ covarFB wB`, `lam2 = 1' lam3`, giving
///   `lambda = ((1 - lam1 + lam2)·c4[i] - c1·(b + lam3[i])) / c`.
pub fn compute_lambda(
    covar_f_inv: &Array2<f64>, covar_fb: Option<&Array2<f64>>, mean_f: &Array1<f64>,
    w_b: Option<&Array1<f64>>, pos: usize, boundary: Boundary,
) -> Option<LambdaCrossing> {
    let c1: f64 = covar_f_inv.sum();
    let c2 = covar_f_inv.dot(mean_f);
    let c3: f64 = c2.sum();
    let c4 = covar_f_inv.dot(&Array1::<f64>::ones(mean_f.len()));

    let c = -c1 * c2[pos] + c3 * c4[pos];
    if c == 0.0 {
        return None;
    }

    let b = match boundary {
        Boundary::Value(value) => value,
        Boundary::Pair { lower, upper } => {
            if c > 0.0 {
                upper
            } else {
                lower
            }
        }
    };

    let lambda = match (covar_fb, w_b) {
        (Some(covar_fb), Some(w_b)) => {
            let lam1: f64 = w_b.sum();
            let lam3 = covar_f_inv.dot(&covar_fb.dot(w_b));
            let lam2: f64 = lam3.sum();
            ((1.0 - lam1 + lam2) * c4[pos] - c1 * (b + lam3[pos])) / c
        }
        _ => (c4[pos] - c1 * b) / c,
    };

    Some(LambdaCrossing { lambda, boundary: b })
}

/// "Absent loses all comparisons": does `candidate` strictly exceed
/// `incumbent`?
///
/// A present value beats an absent incumbent; an absent candidate never
/// beats anything. Equal present values do not exceed each other, which is
/// what lets the engine's tie rule favor case A.
pub fn exceeds(candidate: Option<f64>, incumbent: Option<f64>) -> bool {
    match (candidate, incumbent) {
        (Some(c), Some(i)) => c > i,
        (Some(_), None) => true,
        (None, _) => false,
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
    // - The closed-form lambda on hand-computed diagonal blocks, both with
    //   and without bounded assets.
    // - Boundary-pair resolution by the sign of the crossing coefficient.
    // - The NoCrossing sentinel (c == 0) and the absent-loses comparison
    //   helper.
    //
    // They intentionally DO NOT cover:
    // - The engine's case A / case B candidate scans (tested with the engine).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the all-free closed form on a 2x2 diagonal block against a hand
    // computation.
    //
    // Given
    // -----
    // - covar_f = 0.01 * I2 (inverse 100 * I2), mean_f = [0.2, 0.15].
    // - Target position 1 with literal boundary 0.
    // - Hand computation: c1 = 200, c2 = [20, 15], c3 = 35, c4 = [100, 100],
    //   c = -200*15 + 35*100 = 500, lambda = (100 - 0) / 500 = 0.2.
    //
    // Expect
    // ------
    // - lambda = 0.2 and the boundary echoes the literal 0.
    fn compute_lambda_all_free_matches_hand_computation() {
        // Arrange
        let covar_f_inv = array![[100.0, 0.0], [0.0, 100.0]];
        let mean_f = array![0.2, 0.15];

        // Act
        let crossing =
            compute_lambda(&covar_f_inv, None, &mean_f, None, 1, Boundary::Value(0.0))
                .expect("crossing coefficient is nonzero");

        // Assert
        assert!((crossing.lambda - 0.2).abs() < 1e-12);
        assert_eq!(crossing.boundary, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero cross-covariance bounded block reproduces the
    // all-free lambda scaled by the bounded budget contribution.
    //
    // Given
    // -----
    // - The same free block as above, one bounded asset with weight 0.4 and
    //   zero cross-covariance.
    // - Hand computation: lam1 = 0.4, lam3 = [0, 0], lam2 = 0, so
    //   lambda = ((1 - 0.4) * 100 - 200 * 0) / 500 = 0.12.
    //
    // Expect
    // ------
    // - lambda = 0.12.
    fn compute_lambda_incorporates_bounded_budget_contribution() {
        // Arrange
        let covar_f_inv = array![[100.0, 0.0], [0.0, 100.0]];
        let mean_f = array![0.2, 0.15];
        let covar_fb = array![[0.0], [0.0]];
        let w_b = array![0.4];

        // Act
        let crossing = compute_lambda(
            &covar_f_inv,
            Some(&covar_fb),
            &mean_f,
            Some(&w_b),
            1,
            Boundary::Value(0.0),
        )
        .expect("crossing coefficient is nonzero");

        // Assert
        assert!((crossing.lambda - 0.12).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify boundary-pair resolution: positive coefficient selects the
    // upper bound, negative selects the lower bound.
    //
    // Given
    // -----
    // - covar_f = 0.01 * I2, mean_f = [0.2, 0.15]; at position 1 the
    //   coefficient is +500, at position 0 it is
    //   -200*20 + 35*100 = -500.
    // - Boundary pair lower = 0.1, upper = 0.9 at both positions.
    //
    // Expect
    // ------
    // - Position 1 resolves to 0.9 (upper), position 0 resolves to 0.1
    //   (lower).
    fn compute_lambda_resolves_bound_pair_by_coefficient_sign() {
        // Arrange
        let covar_f_inv = array![[100.0, 0.0], [0.0, 100.0]];
        let mean_f = array![0.2, 0.15];
        let pair = Boundary::Pair { lower: 0.1, upper: 0.9 };

        // Act
        let upper_pick = compute_lambda(&covar_f_inv, None, &mean_f, None, 1, pair)
            .expect("nonzero coefficient at position 1");
        let lower_pick = compute_lambda(&covar_f_inv, None, &mean_f, None, 0, pair)
            .expect("nonzero coefficient at position 0");

        // Assert
        assert_eq!(upper_pick.boundary, 0.9);
        assert_eq!(lower_pick.boundary, 0.1);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a zero crossing coefficient yields the NoCrossing sentinel
    // rather than a zero lambda.
    //
    // Given
    // -----
    // - covar_f = 0.01 * I3 and mean_f = [0.2, 0.15, 0.1]: at position 1,
    //   c = -300*15 + 45*100 = 0.
    //
    // Expect
    // ------
    // - `compute_lambda` returns None.
    fn compute_lambda_returns_none_when_coefficient_is_zero() {
        // Arrange
        let covar_f_inv = array![[100.0, 0.0, 0.0], [0.0, 100.0, 0.0], [0.0, 0.0, 100.0]];
        let mean_f = array![0.2, 0.15, 0.1];

        // Act
        let crossing =
            compute_lambda(&covar_f_inv, None, &mean_f, None, 1, Boundary::Value(0.0));

        // Assert
        assert_eq!(crossing, None);
    }

    #[test]
    // Purpose
    // -------
    // Pin down the absent-loses comparison rules used by the engine.
    //
    // Given
    // -----
    // - Combinations of present and absent candidate/incumbent lambdas.
    //
    // Expect
    // ------
    // - Present beats absent; absent beats nothing; negative present values
    //   still beat absent; equal present values do not exceed each other.
    fn exceeds_encodes_absent_loses_semantics() {
        // Act & Assert
        assert!(exceeds(Some(0.5), Some(0.2)));
        assert!(exceeds(Some(-3.0), None));
        assert!(!exceeds(None, Some(-10.0)));
        assert!(!exceeds(None, None));
        assert!(!exceeds(Some(0.2), Some(0.2)));
        assert!(!exceeds(Some(0.1), Some(0.2)));
    }
}
