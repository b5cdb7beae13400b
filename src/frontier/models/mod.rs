//! models — user-facing solver models built on the frontier core.
//!
//! Purpose
//! -------
//! Expose the critical-line solver as a model object: construct it from a
//! validated problem and options, run the recursion once, then query the
//! purged turning-point sequence and derived points. The heavy lifting lives
//! in `frontier::core`; this layer owns orchestration and result storage.
//!
//! Key behaviors
//! -------------
//! - [`CLAModel`] drives the case A / case B state machine, the terminal
//!   minimum-variance step, and the purge filters, then holds the sequence
//!   for read-only consumption.
//!
//! Downstream usage
//! ----------------
//! - `analysis::sharpe` and `analysis::sampler` take a solved [`CLAModel`]
//!   and never mutate it.
//!
//! Testing notes
//! -------------
//! - The engine's unit tests pin a hand-traced corner sequence; integration
//!   tests drive the model through the analysis layer.

pub mod cla;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cla::CLAModel;
