//! core — problem data, closed-form solvers, and corner bookkeeping for the
//! critical-line recursion.
//!
//! Purpose
//! -------
//! Collect the building blocks the turning-point engine is assembled from:
//! the validated problem container, dense block algebra on the free/bounded
//! partition, the starting-corner construction, the closed-form lambda and
//! weight solvers, the corner type itself, and the post-solve purge filters.
//! The engine in `frontier::models` orchestrates these; nothing here drives
//! the recursion on its own.
//!
//! Key behaviors
//! -------------
//! - Validate and hold problem inputs ([`FrontierProblem`]) so every layer
//!   above can assume finite, dimension-consistent data and ordered bounds.
//! - Partition the covariance into free/bounded blocks and invert the free
//!   block ([`FreeBlocks`], [`free_blocks`], [`invert_block`]).
//! - Build the highest-return feasible corner ([`init_corner_portfolio`]) and
//!   step along the frontier via the closed-form solvers
//!   ([`compute_lambda`], [`compute_weights`]).
//! - Record corners as [`TurningPoint`]s and clean the finished sequence with
//!   [`purge_bound_violations`] and [`purge_dominated`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Every free/bounded split passed between these functions describes the
//!   same partition in the same order; block containers are never mixed
//!   across partitions.
//! - Absent multipliers are `Option::None` and lose every comparison; no
//!   NaN sentinel appears anywhere in the corner bookkeeping.
//! - The bounded index set is always handed around in ascending order
//!   ([`bounded_set`]); the free set keeps the engine's discovery order.
//!
//! Conventions
//! -----------
//! - `ndarray` containers throughout; `nalgebra` appears only inside
//!   [`invert_block`] for the dense inverse.
//! - Errors surface as `FrontierResult`; panics are reserved for logic bugs.
//!
//! Downstream usage
//! ----------------
//! - `frontier::models::cla` drives the recursion: starting corner, then
//!   case A / case B candidate scans via [`compute_lambda`], weight
//!   reconstruction via [`compute_weights`], terminal `lambda = 0` step, and
//!   finally the purges.
//! - `analysis` and `optimization` consume only the resulting
//!   [`TurningPoint`] sequence, never these internals.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests on hand-computed small blocks; the
//!   integration tests exercise the full recursion through the model layer.

pub mod init;
pub mod lambda;
pub mod matrices;
pub mod options;
pub mod problem;
pub mod purge;
pub mod turning_point;
pub mod weights;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::init::init_corner_portfolio;
pub use self::lambda::{Boundary, LambdaCrossing, compute_lambda, exceeds};
pub use self::matrices::{
    FreeBlocks, bounded_set, free_blocks, invert_block, reduce_matrix, reduce_vector,
};
pub use self::options::{DEFAULT_BOUND_TOL, DEFAULT_ITER_FACTOR, SolverOptions};
pub use self::problem::{FrontierProblem, MEAN_PERTURBATION};
pub use self::purge::{purge_bound_violations, purge_dominated};
pub use self::turning_point::TurningPoint;
pub use self::weights::compute_weights;
