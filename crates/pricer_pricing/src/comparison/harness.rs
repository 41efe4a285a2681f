//! Model comparison harness.

use pricer_core::market_data::MarketEnvironment;
use pricer_core::types::PricingError;
use pricer_models::analytical::black_scholes;
use pricer_models::instruments::{OptionContract, OptionType};

use super::config::ComparisonConfig;
use super::report::{ComparisonReport, MethodMeasurement};
use crate::engine::PricingEngine;
use crate::error::ConfigError;
use crate::method::PricingMethod;

/// Prices one option with several methods and reports their agreement.
///
/// Engines are built once from the configuration; [`ModelComparison::run`]
/// iterates them uniformly through [`PricingMethod`].
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketEnvironment;
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_pricing::comparison::{ComparisonConfig, ModelComparison};
///
/// let config = ComparisonConfig { mc_paths: 20_000, ..Default::default() };
/// let harness = ModelComparison::new(config).unwrap();
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, OptionType::Call).unwrap();
/// let market = MarketEnvironment::new(0.05, 0.2).unwrap();
///
/// let report = harness.run(&contract, &market);
/// assert_eq!(report.measurements.len(), 3);
/// assert!(report.agrees_within(0.5));
/// ```
#[derive(Clone, Debug)]
pub struct ModelComparison {
    engines: Vec<PricingEngine>,
}

impl ModelComparison {
    /// Builds the configured engines.
    ///
    /// # Errors
    ///
    /// `ConfigError` if any engine setting is out of range.
    pub fn new(config: ComparisonConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engines: config.engines()?,
        })
    }

    /// Engines in report order.
    #[inline]
    pub fn engines(&self) -> &[PricingEngine] {
        &self.engines
    }

    /// Prices `contract` with every engine.
    pub fn run(&self, contract: &OptionContract, market: &MarketEnvironment) -> ComparisonReport {
        let reference_price = black_scholes::price_contract(contract, market);

        let measurements: Vec<MethodMeasurement> = self
            .engines
            .iter()
            .map(|engine| {
                let result = engine.price(contract, market);
                let measurement = MethodMeasurement::from_result(&result, reference_price);
                tracing::debug!(
                    method = %measurement.method,
                    price = measurement.price,
                    elapsed_us = measurement.elapsed.as_micros() as u64,
                    abs_deviation = measurement.abs_deviation,
                    "method priced"
                );
                measurement
            })
            .collect();

        let report = ComparisonReport {
            reference_price,
            measurements,
        };
        tracing::info!(
            option_type = %contract.option_type(),
            reference_price,
            max_abs_deviation = report.max_abs_deviation(),
            total_elapsed_ms = report.total_elapsed().as_secs_f64() * 1e3,
            "model comparison complete"
        );
        report
    }
}

/// Compares all three methods with the default settings
/// (1000 lattice steps, 100_000 paths, seed 42).
///
/// # Errors
///
/// `PricingError::InvalidInput` if the contract or market values are out of
/// domain.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_pricing::comparison::compare;
///
/// let report = compare(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// assert!(report.agrees_within(0.5));
///
/// assert!(compare(-1.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).is_err());
/// ```
pub fn compare(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<ComparisonReport, PricingError> {
    let contract = OptionContract::new(spot, strike, expiry, option_type)?;
    let market = MarketEnvironment::new(rate, volatility)?;
    let harness = ModelComparison::new(ComparisonConfig::default())?;
    Ok(harness.run(&contract, &market))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::MethodKind;

    fn small_config() -> ComparisonConfig {
        ComparisonConfig {
            lattice_steps: 200,
            mc_paths: 10_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_order_follows_config() {
        let config = ComparisonConfig {
            methods: vec![MethodKind::MonteCarlo, MethodKind::ClosedForm],
            ..small_config()
        };
        let harness = ModelComparison::new(config).unwrap();
        let contract = OptionContract::new(100.0, 110.0, 0.5, OptionType::Call).unwrap();
        let market = MarketEnvironment::new(0.03, 0.25).unwrap();

        let report = harness.run(&contract, &market);
        let order: Vec<MethodKind> = report.measurements.iter().map(|m| m.method).collect();
        assert_eq!(order, vec![MethodKind::MonteCarlo, MethodKind::ClosedForm]);
        assert_eq!(report.get(MethodKind::ClosedForm).unwrap().abs_deviation, 0.0);
        assert!(report.get(MethodKind::Lattice).is_none());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let harness = ModelComparison::new(small_config()).unwrap();
        let contract = OptionContract::new(100.0, 100.0, 1.0, OptionType::Put).unwrap();
        let market = MarketEnvironment::new(0.05, 0.2).unwrap();

        let first = harness.run(&contract, &market);
        let second = harness.run(&contract, &market);
        let price = |r: &ComparisonReport| r.get(MethodKind::MonteCarlo).unwrap().price;
        assert_eq!(price(&first), price(&second));
    }

    #[test]
    fn test_compare_rejects_invalid_inputs() {
        assert!(matches!(
            compare(100.0, 0.0, 1.0, 0.05, 0.2, OptionType::Call),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            compare(100.0, 100.0, 1.0, 0.05, -0.2, OptionType::Call),
            Err(PricingError::InvalidInput(_))
        ));
    }
}
