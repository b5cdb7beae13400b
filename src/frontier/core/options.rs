//! core::options — validated knobs for the turning-point engine.
//!
//! Purpose
//! -------
//! Collect the few tunables the engine exposes — the structural iteration
//! cap and the feasibility tolerance used by the bound-violation purge —
//! behind a constructor that rejects nonsensical values up front, so the
//! engine itself never has to re-check them.
//!
//! Conventions
//! -----------
//! - `max_iter = None` means "derive the cap from the problem size":
//!   the engine uses `DEFAULT_ITER_FACTOR * (n_assets + 1)`, far above the
//!   at-most `2^n` corner count of any practical problem while still
//!   guaranteeing termination if a numerical cycle ever appears.
use crate::frontier::errors::{FrontierError, FrontierResult};

/// Default multiplier for the derived iteration cap.
pub const DEFAULT_ITER_FACTOR: usize = 100;

/// Default tolerance for the post-solve bound-violation purge.
pub const DEFAULT_BOUND_TOL: f64 = 1e-9;

/// Validated engine options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    max_iter: Option<usize>,
    bound_tol: f64,
}

impl SolverOptions {
    /// Build a validated option set.
    ///
    /// Parameters
    /// ----------
    /// - `max_iter`: `Option<usize>`
    ///   Explicit structural iteration cap, or `None` to derive one from the
    ///   problem size.
    /// - `bound_tol`: `f64`
    ///   Tolerance for the bound-violation purge.
    ///
    /// Errors
    /// ------
    /// - [`FrontierError::InvalidMaxIter`] when `max_iter` is `Some(0)`.
    /// - [`FrontierError::InvalidBoundTol`] when `bound_tol` is negative or
    ///   not finite.
    pub fn new(max_iter: Option<usize>, bound_tol: f64) -> FrontierResult<Self> {
        if max_iter == Some(0) {
            return Err(FrontierError::InvalidMaxIter { max_iter: 0 });
        }
        if !bound_tol.is_finite() || bound_tol < 0.0 {
            return Err(FrontierError::InvalidBoundTol { value: bound_tol });
        }
        Ok(Self { max_iter, bound_tol })
    }

    /// Explicit iteration cap, if one was set.
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// Effective iteration cap for a problem with `n_assets` assets.
    pub fn effective_max_iter(&self, n_assets: usize) -> usize {
        match self.max_iter {
            Some(cap) => cap,
            None => DEFAULT_ITER_FACTOR * (n_assets + 1),
        }
    }

    /// Tolerance for the bound-violation purge.
    pub fn bound_tol(&self) -> f64 { self.bound_tol }
}

impl Default for SolverOptions {
    fn default() -> Self { Self { max_iter: None, bound_tol: DEFAULT_BOUND_TOL } }
}
