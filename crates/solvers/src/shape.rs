use thiserror::Error;

/// An input sequence whose length disagrees with the variable count.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{input} has length {actual}, expected {expected}")]
pub struct LengthMismatch {
    /// Name of the offending input (`"coefficients"`, `"exponents"`, ...).
    pub input: &'static str,
    pub expected: usize,
    pub actual: usize,
}

/// Checks that `values` holds exactly `expected` elements.
pub(crate) fn check_len(
    input: &'static str,
    values: &[f64],
    expected: usize,
) -> Result<(), LengthMismatch> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(LengthMismatch {
            input,
            expected,
            actual: values.len(),
        })
    }
}
