use std::error::Error;
use std::fmt;

/// Failures raised by the builders and matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A request for zero rows with a non-zero column count. Column count
    /// is only meaningful relative to an existing row, so this shape has
    /// no representation.
    UnrepresentableShape { rows: usize, cols: usize },
    /// An operation precondition was violated; the message names the
    /// specific rule that failed.
    PreconditionViolated(&'static str),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::UnrepresentableShape { rows, cols } => {
                write!(f, "unrepresentable shape: {} rows with {} columns", rows, cols)
            }
            MatrixError::PreconditionViolated(reason) => write!(f, "{}", reason),
        }
    }
}

impl Error for MatrixError {}
