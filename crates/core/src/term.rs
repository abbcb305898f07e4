#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// A single term `a · x^p` of a separable constraint.
///
/// No invariants are enforced on the coefficient or exponent.
/// A zero coefficient or zero exponent is accepted, and the resulting
/// infinities or NaNs propagate through [`Term::invert`] and
/// [`Term::contribution`] exactly as IEEE-754 arithmetic dictates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Term {
    pub coefficient: f64,
    pub exponent: f64,
}

impl Term {
    /// Creates a term from its coefficient and exponent.
    #[must_use]
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Returns the term's value `a · x^p` at `x`.
    #[must_use]
    pub fn contribution(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }

    /// Returns the `x` for which this term contributes exactly `share`.
    ///
    /// Computes `(share / a)^(1 / p)` using real-valued exponentiation,
    /// so a negative radicand under a fractional root yields NaN.
    #[must_use]
    pub fn invert(&self, share: f64) -> f64 {
        (share / self.coefficient).powf(self.exponent.recip())
    }
}
