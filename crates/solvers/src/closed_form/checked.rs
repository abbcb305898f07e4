use crate::verify::{self, Config, Verification};

use super::{Error, solve};

/// A solution together with its own constraint check.
#[derive(Debug, Clone, PartialEq)]
pub struct Checked {
    pub x: Vec<f64>,
    pub verification: Verification,
}

impl Checked {
    /// Returns `true` if the solution met the default tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verification.is_valid
    }
}

/// Solves the constraint and verifies the result against the default
/// tolerance in one call.
///
/// An invalid verification is not an error. Callers should inspect
/// [`Checked::verification`], which is where degenerate inputs show up.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_checked(a: &[f64], p: &[f64], b: f64, k: f64, n: usize) -> Result<Checked, Error> {
    let x = solve(a, p, b, k, n)?;
    let verification = verify::measure(&x, a, p, b, &Config::default());
    Ok(Checked { x, verification })
}
