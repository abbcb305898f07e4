//! Closed-form solution of a separable polynomial constraint.
//!
//! For `Σ a_i · x_i^p_i = b` with parameter `k`:
//!
//! ```text
//! x_0 = ((b − (n−1)·k) / a_0)^(1/p_0)
//! x_i = (k / a_i)^(1/p_i)              for i in 1..n
//! ```
//!
//! The inversion is exact under real-valued exponentiation; any observed
//! constraint error comes from floating-point rounding alone.

mod checked;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use checked::{Checked, solve_checked};
pub use error::Error;
pub use event::{Action, Event};

use pkform_core::{Observer, Problem, Term};

use crate::shape::check_len;

/// Solves the constraint for `n` variables and returns a fresh solution.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if `n` is zero, or
/// [`Error::LengthMismatch`] if `a` or `p` does not hold `n` values.
pub fn solve(a: &[f64], p: &[f64], b: f64, k: f64, n: usize) -> Result<Vec<f64>, Error> {
    solve_observed(a, p, b, k, n, ())
}

/// Solves the constraint, reporting each computed variable to `observer`.
///
/// The observer sees one [`Event`] per variable in index order and may
/// return [`Action::StopEarly`] to abandon the solve. No partial solution
/// is returned in that case.
///
/// # Errors
///
/// Returns an error if `n` is zero, if `a` or `p` does not hold `n` values,
/// or if the observer stops the solve.
pub fn solve_observed<Obs>(
    a: &[f64],
    p: &[f64],
    b: f64,
    k: f64,
    n: usize,
    mut observer: Obs,
) -> Result<Vec<f64>, Error>
where
    Obs: Observer<Event, Action>,
{
    check_inputs(a, p, n)?;

    let mut x = vec![0.0; n];
    fill(a, p, b, k, &mut x, &mut observer)?;
    Ok(x)
}

/// Solves the constraint into a caller-supplied buffer.
///
/// The variable count is `x.len()`. On error `x` is left untouched.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if `x` is empty, or
/// [`Error::LengthMismatch`] if `a` or `p` differs in length from `x`.
pub fn solve_into(a: &[f64], p: &[f64], b: f64, k: f64, x: &mut [f64]) -> Result<(), Error> {
    check_inputs(a, p, x.len())?;
    fill(a, p, b, k, x, &mut ())
}

/// Solves a validated problem.
#[must_use]
pub fn solve_problem(problem: &Problem, k: f64) -> Vec<f64> {
    let residual = residual(problem.target(), k, problem.len());
    problem
        .terms()
        .enumerate()
        .map(|(index, term)| term.invert(share(index, residual, k)))
        .collect()
}

fn check_inputs(a: &[f64], p: &[f64], n: usize) -> Result<(), Error> {
    if n == 0 {
        return Err(Error::InvalidSize { n });
    }
    check_len("coefficients", a, n)?;
    check_len("exponents", p, n)?;
    Ok(())
}

/// Writes the solution into `x`, whose length has already been checked.
fn fill<Obs>(
    a: &[f64],
    p: &[f64],
    b: f64,
    k: f64,
    x: &mut [f64],
    observer: &mut Obs,
) -> Result<(), Error>
where
    Obs: Observer<Event, Action>,
{
    let residual = residual(b, k, x.len());
    let terms = a.iter().zip(p).map(|(&a, &p)| Term::new(a, p));

    for (index, (slot, term)) in x.iter_mut().zip(terms).enumerate() {
        let share = share(index, residual, k);
        *slot = term.invert(share);

        let event = Event {
            index,
            share,
            value: *slot,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Err(Error::StoppedByObserver { index });
        }
    }

    Ok(())
}

/// The contribution left for the first variable: `b − (n−1)·k`.
#[allow(clippy::cast_precision_loss)]
fn residual(b: f64, k: f64, n: usize) -> f64 {
    b - (n - 1) as f64 * k
}

/// The contribution variable `index` is solved for.
fn share(index: usize, residual: f64, k: f64) -> f64 {
    if index == 0 { residual } else { k }
}
