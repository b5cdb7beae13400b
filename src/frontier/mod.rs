//! frontier — critical-line solver for box-constrained mean-variance
//! frontiers.
//!
//! Purpose
//! -------
//! Compute the full efficient frontier of a long-only-style portfolio
//! problem (budget constraint plus per-asset box bounds) as its exact
//! sequence of turning points, using the critical-line recursion: closed
//! form within a fixed free set, structural steps where the free set
//! changes by one asset.
//!
//! Key behaviors
//! -------------
//! - Validate inputs once ([`FrontierProblem`]) and solve once
//!   ([`CLAModel`]); everything downstream reads the stored corner
//!   sequence.
//! - Between consecutive corners the optimal weights are linear in the
//!   frontier parameter, which the `analysis` layer exploits for sampling
//!   and Sharpe search.
//!
//! Invariants & assumptions
//! ------------------------
//! - The covariance is symmetric and positive semi-definite; singular
//!   free blocks are surfaced as errors, never repaired.
//! - Lambdas are non-increasing along the corner sequence and end at
//!   exactly `0`; the starting corner carries `None` multipliers.
//!
//! Conventions
//! -----------
//! - `ndarray` containers at every API boundary; `nalgebra` only for the
//!   dense inverse inside `core::matrices`.
//! - Errors are `FrontierError` via `FrontierResult`; no panics in
//!   non-test code.
//!
//! Downstream usage
//! ----------------
//! - Build a [`FrontierProblem`], wrap it in a [`CLAModel`] with
//!   [`SolverOptions`], call `solve`, then hand the model to
//!   `analysis::sharpe` / `analysis::sampler` or query
//!   `turning_points` / `min_var` directly.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each core submodule; the crate-level
//!   integration tests run full problems end to end.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{FrontierProblem, SolverOptions, TurningPoint};
pub use self::errors::{FrontierError, FrontierResult};
pub use self::models::CLAModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_frontier::frontier::prelude::*;
//
// to import the main solver surface in a single line.

pub mod prelude {
    pub use super::core::{FrontierProblem, SolverOptions, TurningPoint};
    pub use super::errors::{FrontierError, FrontierResult};
    pub use super::models::CLAModel;
}
