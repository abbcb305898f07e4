#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Outcome of checking a solution against its constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Verification {
    /// Whether `error` is strictly below the tolerance.
    pub is_valid: bool,

    /// Absolute error `|Σ a_i · x_i^p_i − b|`.
    pub error: f64,

    /// The recomputed left-hand side `Σ a_i · x_i^p_i`.
    pub constraint_value: f64,
}

impl Verification {
    pub(crate) fn new(constraint_value: f64, target: f64, tolerance: f64) -> Self {
        let error = (constraint_value - target).abs();
        Self {
            is_valid: error < tolerance,
            error,
            constraint_value,
        }
    }
}
