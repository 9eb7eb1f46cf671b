//! Error types for equation solving.
//!
//! Singular systems are an expected outcome of a solve, so they are reported
//! as a regular error variant rather than a panic.

use thiserror::Error;

/// Errors that can occur while building or solving an equation system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Matrix shape or input lengths are not acceptable.
    #[error("invalid dimension: {reason}")]
    InvalidDimension {
        /// What was wrong with the requested shape
        reason: String,
    },

    /// Element access outside of the matrix bounds.
    #[error("index ({row}, {col}) out of range for a {rows}x{columns} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows of the matrix
        rows: usize,
        /// Number of columns of the matrix
        columns: usize,
    },

    /// The system has no unique solution.
    #[error("matrix is singular: no usable pivot in column {pivot}")]
    SingularMatrix {
        /// Elimination column in which no pivot above machine epsilon was found
        pivot: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    pub(crate) fn invalid_dimension(reason: impl Into<String>) -> Self {
        SolverError::InvalidDimension {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the system was singular.
    pub fn is_singular(&self) -> bool {
        matches!(self, SolverError::SingularMatrix { .. })
    }

    /// Returns `true` if the input had an unacceptable shape.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, SolverError::InvalidDimension { .. })
    }

    /// Returns `true` if this is an out-of-bounds access.
    ///
    /// These indicate a programming fault in the caller, not bad user input.
    pub fn is_index_error(&self) -> bool {
        matches!(self, SolverError::IndexOutOfRange { .. })
    }
}
