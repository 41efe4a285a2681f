//! Binomial lattice configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of time steps.
pub const MAX_STEPS: usize = 100_000;

/// Default number of time steps.
pub const DEFAULT_STEPS: usize = 500;

/// Lattice configuration.
///
/// # Examples
/// ```
/// use pricer_pricing::lattice::LatticeConfig;
///
/// assert_eq!(LatticeConfig::default().steps(), 500);
/// assert_eq!(LatticeConfig::new(1000).unwrap().steps(), 1000);
/// assert!(LatticeConfig::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeConfig {
    steps: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl LatticeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidStepCount` if `steps` is outside `[1, MAX_STEPS]`.
    pub fn new(steps: usize) -> Result<Self, ConfigError> {
        let config = Self { steps };
        config.validate()?;
        Ok(config)
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Validates the step count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 || self.steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.steps));
        }
        Ok(())
    }
}
