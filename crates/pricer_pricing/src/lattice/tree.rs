//! Cox-Ross-Rubinstein binomial tree.
//!
//! With `Δt = T/n`, `u = e^(σ√Δt)`, `d = 1/u` and
//! `p = (e^((r-q)Δt) - d)/(u - d)`, terminal node `i` (counting down-moves)
//! holds `S·u^(n-i)·d^i`. European backward induction discounts by
//! `e^(-rΔt)` per step over a single buffer of `n + 1` values.

use pricer_core::market_data::MarketEnvironment;
use pricer_models::analytical::black_scholes::{BsmInputs, Regime};
use pricer_models::instruments::{OptionContract, OptionType};

use super::config::LatticeConfig;
use crate::error::ConfigError;
use crate::method::{timed, MethodKind, PricingMethod, PricingResult};

/// Binomial lattice pricer.
///
/// Deterministic: the same inputs and step count always give the same price.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::BsmInputs;
/// use pricer_models::instruments::OptionType;
/// use pricer_pricing::lattice::{BinomialTree, LatticeConfig};
///
/// let tree = BinomialTree::new(LatticeConfig::new(1000).unwrap());
/// let inputs = BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
///
/// let lattice = tree.value(&inputs, OptionType::Call);
/// let closed_form = inputs.price(OptionType::Call);
/// assert!((lattice - closed_form).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BinomialTree {
    config: LatticeConfig,
}

impl BinomialTree {
    /// Creates a tree from a validated configuration.
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Present value of a European option.
    ///
    /// Expired and zero-volatility inputs take the closed-form regime value.
    ///
    /// When the step count is too coarse for the drift, `p` leaves `[0, 1]`
    /// and the induction is no longer a risk-neutral expectation: the value
    /// can be negative. A warning is logged and the value is returned as is.
    pub fn value(&self, inputs: &BsmInputs, option_type: OptionType) -> f64 {
        if inputs.regime() != Regime::General {
            return inputs.price(option_type);
        }

        let n = self.config.steps();
        let dt = inputs.expiry / n as f64;
        let vol_sqrt_dt = inputs.volatility * dt.sqrt();
        let u = vol_sqrt_dt.exp();
        let d = 1.0 / u;
        let growth = ((inputs.rate - inputs.dividend_yield) * dt).exp();
        let p = (growth - d) / (u - d);
        let discount = (-inputs.rate * dt).exp();

        if !(0.0..=1.0).contains(&p) {
            tracing::warn!(
                probability = p,
                steps = n,
                "risk-neutral probability outside [0, 1]; increase the step count"
            );
        }

        let up = discount * p;
        let down = discount * (1.0 - p);

        let mut values: Vec<f64> = (0..=n)
            .map(|i| {
                let log_move = vol_sqrt_dt * (n as f64 - 2.0 * i as f64);
                option_type.intrinsic(inputs.spot * log_move.exp(), inputs.strike)
            })
            .collect();

        for step in (0..n).rev() {
            for i in 0..=step {
                values[i] = up * values[i] + down * values[i + 1];
            }
        }

        values[0]
    }
}

impl PricingMethod for BinomialTree {
    fn kind(&self) -> MethodKind {
        MethodKind::Lattice
    }

    fn price(&self, contract: &OptionContract, market: &MarketEnvironment) -> PricingResult {
        timed(MethodKind::Lattice, || {
            let inputs = BsmInputs::from_parts(contract, market);
            (self.value(&inputs, contract.option_type()), None, None)
        })
    }
}

/// Binomial lattice price with zero dividend yield.
///
/// # Errors
///
/// `ConfigError::InvalidStepCount` if `steps` is outside `[1, 100_000]`.
///
/// The result is not clamped: see [`BinomialTree::value`] for step counts
/// that put the risk-neutral probability outside `[0, 1]`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_pricing::lattice::binomial_price;
///
/// let put = binomial_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put, 1000).unwrap();
/// assert!((put - 5.5735).abs() < 0.01);
/// ```
pub fn binomial_price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
    steps: usize,
) -> Result<f64, ConfigError> {
    let tree = BinomialTree::new(LatticeConfig::new(steps)?);
    Ok(tree.value(
        &BsmInputs::new(spot, strike, expiry, rate, volatility),
        option_type,
    ))
}
