//! Verification of candidate solutions against the original constraint.
//!
//! The verifier recomputes `Σ a_i · x_i^p_i` and compares it with `b` using a
//! fixed absolute tolerance of [`TOLERANCE`]. A NaN sum never compares below
//! the tolerance, so degenerate solutions are always reported as invalid.

mod config;
mod error;
mod verification;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use verification::Verification;

use pkform_core::{Problem, Term};

use crate::shape::check_len;

/// Absolute tolerance used by [`verify`].
pub const TOLERANCE: f64 = 1e-10;

/// Checks that `x` satisfies `Σ a_i · x_i^p_i = b` within [`TOLERANCE`].
///
/// A zero `n` is accepted; the sum is then `0.0`.
///
/// # Errors
///
/// Returns an error if `x`, `a`, or `p` does not hold exactly `n` values.
pub fn verify(x: &[f64], a: &[f64], p: &[f64], b: f64, n: usize) -> Result<Verification, Error> {
    verify_with(x, a, p, b, n, &Config::default())
}

/// Checks `x` against the constraint using the tolerance in `config`.
///
/// # Errors
///
/// Returns an error if `x`, `a`, or `p` does not hold exactly `n` values.
pub fn verify_with(
    x: &[f64],
    a: &[f64],
    p: &[f64],
    b: f64,
    n: usize,
    config: &Config,
) -> Result<Verification, Error> {
    check_len("solution", x, n)?;
    check_len("coefficients", a, n)?;
    check_len("exponents", p, n)?;

    Ok(measure(x, a, p, b, config))
}

/// Checks `x` against a validated problem.
///
/// # Errors
///
/// Returns an error if `x` does not hold one value per problem variable.
pub fn verify_problem(problem: &Problem, x: &[f64]) -> Result<Verification, Error> {
    check_len("solution", x, problem.len())?;

    Ok(Verification::new(
        problem.constraint_value(x),
        problem.target(),
        Config::default().tolerance(),
    ))
}

/// Computes the verification for inputs whose lengths are already known to agree.
pub(crate) fn measure(x: &[f64], a: &[f64], p: &[f64], b: f64, config: &Config) -> Verification {
    let constraint_value = x
        .iter()
        .zip(a.iter().zip(p))
        .fold(0.0, |sum, (&xi, (&ai, &pi))| {
            sum + Term::new(ai, pi).contribution(xi)
        });

    Verification::new(constraint_value, b, config.tolerance())
}
