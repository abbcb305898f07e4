use thiserror::Error;

use super::TOLERANCE;

/// Configuration for the verifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
}

/// Errors that can occur when validating a verifier config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new config with a validated absolute tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self { tolerance })
    }

    /// Returns the absolute tolerance a solution's error must stay below.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
