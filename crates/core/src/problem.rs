#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Term;

/// A separable polynomial constraint `Σ a_i · x_i^p_i = b`.
///
/// The coefficient and exponent sequences are index-aligned and never empty.
/// Individual values are not checked, see [`Term`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(try_from = "RawProblem"))]
pub struct Problem {
    coefficients: Vec<f64>,
    exponents: Vec<f64>,
    target: f64,
}

/// Errors that can occur when constructing a [`Problem`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProblemError {
    #[error("problem must have at least one variable")]
    Empty,

    #[error("{coefficients} coefficients but {exponents} exponents")]
    LengthMismatch {
        coefficients: usize,
        exponents: usize,
    },
}

impl Problem {
    /// Creates a problem from its coefficients, exponents, and target value.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences are empty or differ in length.
    pub fn new(
        coefficients: Vec<f64>,
        exponents: Vec<f64>,
        target: f64,
    ) -> Result<Self, ProblemError> {
        if coefficients.len() != exponents.len() {
            return Err(ProblemError::LengthMismatch {
                coefficients: coefficients.len(),
                exponents: exponents.len(),
            });
        }
        if coefficients.is_empty() {
            return Err(ProblemError::Empty);
        }

        Ok(Self {
            coefficients,
            exponents,
            target,
        })
    }

    /// Creates a problem from a sequence of terms.
    ///
    /// # Errors
    ///
    /// Returns an error if `terms` is empty.
    pub fn from_terms(
        terms: impl IntoIterator<Item = Term>,
        target: f64,
    ) -> Result<Self, ProblemError> {
        let (coefficients, exponents) = terms
            .into_iter()
            .map(|term| (term.coefficient, term.exponent))
            .unzip();
        Self::new(coefficients, exponents, target)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always `false`; a problem has at least one variable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[must_use]
    pub fn exponents(&self) -> &[f64] {
        &self.exponents
    }

    /// Returns the constraint's right-hand side `b`.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns the term at `index`, if any.
    #[must_use]
    pub fn term(&self, index: usize) -> Option<Term> {
        Some(Term::new(
            *self.coefficients.get(index)?,
            *self.exponents.get(index)?,
        ))
    }

    /// Iterates over the terms in index order.
    pub fn terms(&self) -> impl ExactSizeIterator<Item = Term> + '_ {
        self.coefficients
            .iter()
            .zip(&self.exponents)
            .map(|(&a, &p)| Term::new(a, p))
    }

    /// Evaluates the left-hand side `Σ a_i · x_i^p_i` at `x`.
    ///
    /// Terms are paired with `x` positionally; extra values on either side
    /// are ignored. Callers that need a length check should go through the
    /// verifier instead.
    #[must_use]
    pub fn constraint_value(&self, x: &[f64]) -> f64 {
        self.terms()
            .zip(x)
            .fold(0.0, |sum, (term, &xi)| sum + term.contribution(xi))
    }
}

#[cfg(feature = "serde-derive")]
#[derive(Deserialize)]
struct RawProblem {
    coefficients: Vec<f64>,
    exponents: Vec<f64>,
    target: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawProblem> for Problem {
    type Error = ProblemError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        Self::new(raw.coefficients, raw.exponents, raw.target)
    }
}
