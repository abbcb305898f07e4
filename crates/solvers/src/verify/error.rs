use thiserror::Error;

use crate::shape::LengthMismatch;

/// Errors that can occur during verification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    LengthMismatch(#[from] LengthMismatch),
}
