//! optimization — derivative-free scalar search and its error surface.
//!
//! Purpose
//! -------
//! Provide the one-dimensional optimization primitive the analysis layer
//! builds on: a golden-section bracket-narrowing search over a unimodal
//! objective, with an explicit configuration object and a small error
//! enum. Callers supply a closure, an interval, and a direction; no solver
//! state survives a call.
//!
//! Key behaviors
//! -------------
//! - [`golden_section`] narrows `[a, b]` with the golden ratio for a fixed,
//!   precomputed number of iterations derived from the tolerance, rather
//!   than checking convergence per step.
//! - Direction (minimize/maximize) is an explicit [`Direction`] flag on
//!   [`GoldenSectionConfig`]; internally everything minimizes a signed
//!   objective and un-signs the attained value on the way out.
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective is assumed unimodal on the interval; the search does not
//!   detect violations, it simply converges to a local optimum.
//! - Configuration is validated at construction ([`GoldenSectionConfig::new`]);
//!   the search itself cannot fail.
//!
//! Conventions
//! -----------
//! - Public entrypoints that can fail return `OptResult<T>`; the search
//!   evaluates plain `Fn(f64) -> f64` closures and performs no I/O.
//!
//! Downstream usage
//! ----------------
//! - `analysis::sharpe` maximizes the Sharpe ratio along each frontier
//!   segment with one `golden_section` call per segment.
//!
//! Testing notes
//! -------------
//! - Unit tests cover quadratic minima/maxima with known optima, tolerance
//!   scaling of the iteration count, and configuration validation.

pub mod errors;
pub mod golden;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{OptError, OptResult};
pub use self::golden::{Direction, GoldenSectionConfig, SearchOutcome, golden_section};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_frontier::optimization::prelude::*;
//
// to import the main search surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::golden::{Direction, GoldenSectionConfig, SearchOutcome, golden_section};
}
