//! Closed-form solving and verification of separable polynomial constraints.
//!
//! Given `Σ a_i · x_i^p_i = b` and a parameter `k`, every variable except the
//! first is assigned the same contribution `a_i · x_i^p_i = k`, and the first
//! absorbs the residual `b − (n−1)·k`. Each variable then follows from a
//! single power evaluation, so solving is O(n) with no iteration.
//!
//! # Modules
//!
//! - [`closed_form`] — computes the solution vector
//! - [`verify`] — recomputes the constraint and checks it against a tolerance
//!
//! Both are pure functions over caller-owned slices. Degenerate inputs such as
//! zero coefficients, zero exponents, or negative radicands under fractional
//! roots are not errors; they produce IEEE-754 infinities or NaNs, which the
//! verifier then reports as invalid.

mod shape;

pub mod closed_form;
pub mod verify;

pub use shape::LengthMismatch;
