//! Error types for engine configuration.
//!
//! Shared by the Monte Carlo and lattice configurations: both are validated
//! once at construction, after which pricing cannot fail.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration validation errors.
///
/// # Examples
/// ```
/// use pricer_pricing::error::ConfigError;
///
/// let err = ConfigError::InvalidPathCount(0);
/// assert!(err.to_string().contains("Invalid path count 0"));
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Monte Carlo path count outside `[1, 10_000_000]`.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Lattice step count outside `[1, 100_000]`.
    #[error("Invalid step count {0}: must be in range [1, 100_000]")]
    InvalidStepCount(usize),

    /// Any other out-of-range parameter.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the problem
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
