//! Core types for closed-form separable polynomial constraints.
//!
//! A separable constraint has the form `Σ a_i · x_i^p_i = b`, where each term
//! depends on exactly one variable. This crate defines the shared shapes that
//! the solver and verifier in `pkform-solvers` build on:
//!
//! - [`Term`] — one `(coefficient, exponent)` pair and its forward/inverse maps
//! - [`Problem`] — validated, index-aligned terms plus the target value `b`
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod problem;
mod term;

pub use observer::Observer;
pub use problem::{Problem, ProblemError};
pub use term::Term;
