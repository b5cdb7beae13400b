//! analysis — read-only consumers of a solved frontier.
//!
//! Purpose
//! -------
//! Derive the quantities callers actually ask of a solved frontier: the
//! maximum-Sharpe portfolio and a discretized set of (mean, risk, weights)
//! samples. Everything here treats the solved model as immutable input;
//! no analysis routine mutates the corner sequence.
//!
//! Key behaviors
//! -------------
//! - `sharpe` runs one golden-section search per frontier segment and takes
//!   the global maximum across segments ([`max_sharpe`]).
//! - `sampler` splits a target sample count across segments and
//!   interpolates weights linearly within each ([`sample_frontier`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Both routines rely on weights being exactly linear in the
//!   interpolation parameter between consecutive corners; the solver
//!   guarantees this.
//! - Preconditions (solved model, at least two corners, meaningful sample
//!   count) surface as [`AnalysisError`], never as degraded output.
//!
//! Downstream usage
//! ----------------
//! - The Python bindings expose [`max_sharpe`] and [`sample_frontier`]
//!   next to the solver queries; native callers use them directly.
//!
//! Testing notes
//! -------------
//! - Unit tests check the analytic tangency portfolio of an
//!   identity-covariance problem and the exact sample layout; integration
//!   tests combine both with the solver on larger problems.

pub mod errors;
pub mod sampler;
pub mod sharpe;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{AnalysisError, AnalysisResult};
pub use self::sampler::{FrontierSamples, interpolate, sample_frontier};
pub use self::sharpe::{MaxSharpePoint, max_sharpe};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_frontier::analysis::prelude::*;
//
// to import the main analysis surface in a single line.

pub mod prelude {
    pub use super::errors::{AnalysisError, AnalysisResult};
    pub use super::sampler::{FrontierSamples, interpolate, sample_frontier};
    pub use super::sharpe::{MaxSharpePoint, max_sharpe};
}
