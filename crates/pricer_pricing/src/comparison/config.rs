//! Comparison harness configuration.
//!
//! Deserialisable with `serde`; every field has a default, so a partial
//! TOML document (or an empty one) is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytical::ClosedFormPricer;
use crate::engine::PricingEngine;
use crate::error::ConfigError;
use crate::lattice::{BinomialTree, LatticeConfig};
use crate::mc::{MonteCarloConfig, MonteCarloPricer};
use crate::method::MethodKind;

/// Default lattice steps for comparison runs.
pub const DEFAULT_COMPARISON_STEPS: usize = 1000;
/// Default Monte Carlo paths for comparison runs.
pub const DEFAULT_COMPARISON_PATHS: usize = 100_000;
/// Default Monte Carlo seed, fixed so reports are reproducible.
pub const DEFAULT_COMPARISON_SEED: u64 = 42;

/// Errors loading a comparison configuration.
#[derive(Error, Debug)]
pub enum ComparisonConfigError {
    /// Malformed TOML or mistyped field.
    #[error("Failed to parse comparison config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Well-formed but out of range.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Settings for [`ModelComparison`](super::ModelComparison).
///
/// # Examples
/// ```
/// use pricer_pricing::comparison::ComparisonConfig;
/// use pricer_pricing::method::MethodKind;
///
/// let config = ComparisonConfig::from_toml_str(
///     r#"
///     lattice_steps = 250
///     methods = ["black_scholes", "binomial"]
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.lattice_steps, 250);
/// assert_eq!(config.mc_paths, 100_000);
/// assert_eq!(config.methods, vec![MethodKind::ClosedForm, MethodKind::Lattice]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Time steps for the binomial lattice.
    pub lattice_steps: usize,
    /// Monte Carlo path count.
    pub mc_paths: usize,
    /// Monte Carlo seed; `None` draws fresh entropy per run.
    ///
    /// TOML has no null, so an omitted key means the default seed.
    pub mc_seed: Option<u64>,
    /// Antithetic variates for Monte Carlo.
    pub antithetic: bool,
    /// Parallel Monte Carlo chunks.
    pub parallel: bool,
    /// Methods to run, in report order.
    pub methods: Vec<MethodKind>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            lattice_steps: DEFAULT_COMPARISON_STEPS,
            mc_paths: DEFAULT_COMPARISON_PATHS,
            mc_seed: Some(DEFAULT_COMPARISON_SEED),
            antithetic: false,
            parallel: false,
            methods: vec![
                MethodKind::ClosedForm,
                MethodKind::Lattice,
                MethodKind::MonteCarlo,
            ],
        }
    }
}

impl ComparisonConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed TOML or unknown fields, `Invalid` for values
    /// out of range.
    pub fn from_toml_str(source: &str) -> Result<Self, ComparisonConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every engine setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engines().map(|_| ())
    }

    /// Builds the configured engines in report order.
    ///
    /// # Errors
    ///
    /// `ConfigError` if a step or path count is out of range or the method
    /// list is empty.
    pub fn engines(&self) -> Result<Vec<PricingEngine>, ConfigError> {
        if self.methods.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "methods",
                value: "at least one method is required".to_string(),
            });
        }

        let lattice = LatticeConfig::new(self.lattice_steps)?;
        let mc = MonteCarloConfig::builder()
            .n_paths(self.mc_paths)
            .maybe_seed(self.mc_seed)
            .antithetic(self.antithetic)
            .parallel(self.parallel)
            .build()?;

        self.methods
            .iter()
            .map(|kind| -> Result<PricingEngine, ConfigError> {
                Ok(match kind {
                    MethodKind::ClosedForm => PricingEngine::from(ClosedFormPricer),
                    MethodKind::Lattice => PricingEngine::from(BinomialTree::new(lattice)),
                    MethodKind::MonteCarlo => PricingEngine::from(MonteCarloPricer::new(mc)?),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ComparisonConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engines().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ComparisonConfig::from_toml_str("").unwrap();
        assert_eq!(config, ComparisonConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = ComparisonConfig::from_toml_str(
            r#"
            lattice_steps = 400
            mc_paths = 20000
            mc_seed = 7
            antithetic = true
            parallel = true
            methods = ["monte_carlo"]
            "#,
        )
        .unwrap();
        assert_eq!(config.mc_seed, Some(7));
        assert!(config.antithetic && config.parallel);
        assert_eq!(config.methods, vec![MethodKind::MonteCarlo]);
    }

    #[test]
    fn test_rejects_unknown_field() {
        let result = ComparisonConfig::from_toml_str("steps = 10");
        assert!(matches!(result, Err(ComparisonConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let result = ComparisonConfig::from_toml_str("lattice_steps = 0");
        assert!(matches!(
            result,
            Err(ComparisonConfigError::Invalid(ConfigError::InvalidStepCount(0)))
        ));

        let result = ComparisonConfig::from_toml_str("mc_paths = 0");
        assert!(matches!(
            result,
            Err(ComparisonConfigError::Invalid(ConfigError::InvalidPathCount(0)))
        ));

        let result = ComparisonConfig::from_toml_str("methods = []");
        assert!(matches!(
            result,
            Err(ComparisonConfigError::Invalid(ConfigError::InvalidParameter { name: "methods", .. }))
        ));
    }

    #[test]
    fn test_unknown_method_name() {
        let result = ComparisonConfig::from_toml_str(r#"methods = ["trinomial"]"#);
        assert!(matches!(result, Err(ComparisonConfigError::Parse(_))));
    }
}
