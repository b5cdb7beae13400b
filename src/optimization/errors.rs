use std::fmt;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for scalar search operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Configuration ----
    /// Tolerance needs to be positive and finite.
    InvalidTolerance {
        tol: f64,
        reason: &'static str,
    },

    /// Interval endpoints need to be finite with a < b.
    InvalidInterval {
        a: f64,
        b: f64,
        reason: &'static str,
    },
}

impl std::error::Error for OptError {}

impl fmt::Display for OptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // ---- Configuration ----
            OptError::InvalidTolerance { tol, reason } => {
                write!(f, "Invalid search tolerance {tol}: {reason}")
            }
            OptError::InvalidInterval { a, b, reason } => {
                write!(f, "Invalid search interval [{a}, {b}]: {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptError> for PyErr {
    fn from(err: OptError) -> Self { PyValueError::new_err(err.to_string()) }
}
