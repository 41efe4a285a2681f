//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Configuration for root-finding algorithms.
///
/// Convergence is declared when either `|f(x)| < tolerance` or the
/// bracket has shrunk below `tolerance` (plus a machine-epsilon term
/// relative to the current iterate).
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig::new(1e-12, 200).unwrap();
/// assert_eq!(custom.max_iterations, 200);
///
/// assert!(SolverConfig::new(0.0_f64, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on both the residual and the bracket width.
    pub tolerance: T,

    /// Maximum number of iterations before giving up with
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values: `tolerance = 1e-10`, `max_iterations = 100`.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// `SolverError::InvalidConfig` if `tolerance` is not a positive finite
    /// number or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the constraints enforced by [`SolverConfig::new`].
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.tolerance.is_finite() || self.tolerance <= T::zero() {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a copy with a different tolerance (unvalidated).
    #[inline]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns a copy with a different iteration budget (unvalidated).
    #[inline]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200).unwrap();
        assert!((config.tolerance - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    fn test_rejects_non_positive_tolerance() {
        assert!(matches!(
            SolverConfig::new(0.0_f64, 100),
            Err(SolverError::InvalidConfig(_))
        ));
        assert!(SolverConfig::new(-1e-10_f64, 100).is_err());
        assert!(SolverConfig::new(f64::NAN, 100).is_err());
        assert!(SolverConfig::new(f64::INFINITY, 100).is_err());
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err = SolverConfig::new(1e-10_f64, 0).unwrap_err();
        assert!(err.to_string().contains("max_iterations"));
    }

    #[test]
    fn test_builder_methods() {
        let config: SolverConfig<f64> = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(25);
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 25);
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(config.max_iterations, 100);
    }
}
