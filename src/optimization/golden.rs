//! golden — golden-section search over a unimodal scalar objective.
//!
//! Purpose
//! -------
//! Locate the optimum of a unimodal function on a closed interval without
//! derivatives, by golden-ratio bracket narrowing. The iteration count is
//! fixed up front from the tolerance and interval width, so the loop body
//! carries no convergence check and the cost of a call is known before the
//! first objective evaluation.
//!
//! Key behaviors
//! -------------
//! - `num_iter = ceil(-2.078087 * ln(tol / (b - a))) + 1`, the closed-form
//!   count that shrinks the bracket below `tol` (2.078087 ≈ 1/ln(1/r) for
//!   the golden ratio complement r ≈ 0.618).
//! - Maximization runs the same loop on the negated objective; the returned
//!   value is always in the caller's orientation.
//!
//! Conventions
//! -----------
//! - The two interior points reuse one objective evaluation per iteration;
//!   each step evaluates the objective exactly once.
use crate::optimization::errors::{OptError, OptResult};

/// Golden ratio complement used for bracket narrowing.
const GOLDEN_RATIO: f64 = 0.618033989;

/// Closed-form factor `1 / ln(1 / r)` for the iteration count.
const ITER_FACTOR: f64 = 2.078087;

/// Search orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

/// Validated golden-section configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenSectionConfig {
    tol: f64,
    direction: Direction,
}

impl GoldenSectionConfig {
    /// Build a validated configuration.
    ///
    /// Parameters
    /// ----------
    /// - `tol`: `f64`
    ///   Width below which the bracket is considered resolved.
    /// - `direction`: [`Direction`]
    ///   Whether to minimize or maximize the objective.
    ///
    /// Errors
    /// ------
    /// - [`OptError::InvalidTolerance`] when `tol` is non-positive or not
    ///   finite.
    pub fn new(tol: f64, direction: Direction) -> OptResult<Self> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(OptError::InvalidTolerance {
                tol,
                reason: "must be finite and strictly positive",
            });
        }
        Ok(Self { tol, direction })
    }

    /// Bracket-resolution tolerance.
    pub fn tol(&self) -> f64 { self.tol }

    /// Search orientation.
    pub fn direction(&self) -> Direction { self.direction }
}

/// Result of a golden-section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Optimizing argument.
    pub argument: f64,
    /// Attained objective value, in the caller's orientation.
    pub value: f64,
}

/// Golden-section search on `[a, b]`.
///
/// Parameters
/// ----------
/// - `objective`: `impl Fn(f64) -> f64`
///   Unimodal scalar objective.
/// - `a`, `b`: `f64`
///   Interval endpoints, `a < b`.
/// - `config`: `&GoldenSectionConfig`
///   Validated tolerance and direction.
///
/// Returns
/// -------
/// `OptResult<SearchOutcome>`
///   Optimizing argument and attained value.
///
/// Errors
/// ------
/// - [`OptError::InvalidInterval`] when an endpoint is not finite or
///   `a >= b`.
pub fn golden_section(
    objective: impl Fn(f64) -> f64, a: f64, b: f64, config: &GoldenSectionConfig,
) -> OptResult<SearchOutcome> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(OptError::InvalidInterval {
            a,
            b,
            reason: "endpoints must be finite with a < b",
        });
    }
    let sign = match config.direction() {
        Direction::Minimize => 1.0,
        Direction::Maximize => -1.0,
    };
    let num_iter = (-ITER_FACTOR * (config.tol() / (b - a).abs()).ln()).ceil() as usize + 1;

    let r = GOLDEN_RATIO;
    let c = 1.0 - r;
    let (mut a, mut b) = (a, b);
    let mut x1 = r * a + c * b;
    let mut x2 = c * a + r * b;
    let mut f1 = sign * objective(x1);
    let mut f2 = sign * objective(x2);
    for _ in 0..num_iter {
        if f1 > f2 {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = c * a + r * b;
            f2 = sign * objective(x2);
        } else {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = r * a + c * b;
            f1 = sign * objective(x1);
        }
    }
    let outcome = if f1 < f2 {
        SearchOutcome { argument: x1, value: sign * f1 }
    } else {
        SearchOutcome { argument: x2, value: sign * f2 }
    };
    Ok(outcome)
}
