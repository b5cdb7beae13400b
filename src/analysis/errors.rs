use std::fmt;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::frontier::errors::FrontierError;
use crate::optimization::errors::OptError;

/// Result alias for frontier analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    // ---- Preconditions ----
    /// The model has not been solved yet.
    NotSolved,

    /// Segment-based analysis needs at least two turning points.
    TooFewTurningPoints {
        found: usize,
    },

    /// Requested sample count yields no samples per segment.
    InvalidSampleCount {
        points: usize,
        corners: usize,
    },

    // ---- Propagated failures ----
    /// Wrapper for solver errors other than NotSolved.
    Solver {
        text: String,
    },
    /// Wrapper for scalar search errors.
    Search {
        text: String,
    },
}

impl std::error::Error for AnalysisError {}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // ---- Preconditions ----
            AnalysisError::NotSolved => {
                write!(f, "Model has not been solved; call solve first")
            }
            AnalysisError::TooFewTurningPoints { found } => {
                write!(f, "Need at least two turning points, found {found}")
            }
            AnalysisError::InvalidSampleCount { points, corners } => {
                write!(
                    f,
                    "Sample count {points} yields no samples per segment for {corners} turning points"
                )
            }

            // ---- Propagated failures ----
            AnalysisError::Solver { text } => {
                write!(f, "Solver error: {text}")
            }
            AnalysisError::Search { text } => {
                write!(f, "Search error: {text}")
            }
        }
    }
}

impl From<FrontierError> for AnalysisError {
    fn from(err: FrontierError) -> Self {
        match err {
            FrontierError::NotSolved => AnalysisError::NotSolved,
            other => AnalysisError::Solver { text: other.to_string() },
        }
    }
}

impl From<OptError> for AnalysisError {
    fn from(err: OptError) -> Self { AnalysisError::Search { text: err.to_string() } }
}

#[cfg(feature = "python-bindings")]
impl From<AnalysisError> for PyErr {
    fn from(err: AnalysisError) -> Self { PyValueError::new_err(err.to_string()) }
}
