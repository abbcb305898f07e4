use thiserror::Error;

use crate::shape::LengthMismatch;

/// Errors that can occur during a closed-form solve.
///
/// Numeric degeneracies are not errors; they surface as infinities or NaNs
/// in the solution.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("variable count must be positive, got {n}")]
    InvalidSize { n: usize },

    #[error("invalid input: {0}")]
    LengthMismatch(#[from] LengthMismatch),

    #[error("stopped by observer at variable {index}")]
    StoppedByObserver { index: usize },
}
