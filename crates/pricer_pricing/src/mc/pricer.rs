//! Monte Carlo pricing engine.
//!
//! Simulates the terminal price of geometric Brownian motion in one step,
//!
//! S_T = S·exp((r - q - σ²/2)T + σ√T·Z),
//!
//! and discounts the mean payoff at the risk-free rate.
//!
//! # Stream partitioning
//!
//! The paths are cut into chunks of [`CHUNK_SIZE`](super::config::CHUNK_SIZE).
//! Chunk `i` fills one buffer of normals from
//! [`PricerRng::for_stream`]`(seed, i)` and folds it into a
//! [`PayoffAccumulator`]; the accumulators are merged in chunk order. The
//! sequential and rayon-parallel paths therefore give identical results.

use rayon::prelude::*;

use pricer_core::market_data::MarketEnvironment;
use pricer_models::analytical::black_scholes::{BsmInputs, Regime};
use pricer_models::instruments::{OptionContract, OptionType};

use super::config::{MonteCarloConfig, CHUNK_SIZE};
use crate::error::ConfigError;
use crate::method::{timed, MethodKind, PricingMethod, PricingResult};
use crate::rng::PricerRng;

/// Running sums of undiscounted payoff samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayoffAccumulator {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl PayoffAccumulator {
    /// Adds one sample.
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.sum_sq += value * value;
        self.count += 1;
    }

    /// Folds another accumulator into this one.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
    }

    /// Number of samples.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample mean (0 when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Standard error of the mean (0 with fewer than two samples).
    pub fn std_error(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = ((self.sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    }
}

/// Per-call simulation constants.
#[derive(Clone, Copy, Debug)]
struct TerminalLaw {
    spot: f64,
    strike: f64,
    drift: f64,
    diffusion: f64,
    option_type: OptionType,
}

impl TerminalLaw {
    fn new(inputs: &BsmInputs, option_type: OptionType) -> Self {
        let vol = inputs.volatility;
        Self {
            spot: inputs.spot,
            strike: inputs.strike,
            drift: (inputs.rate - inputs.dividend_yield - 0.5 * vol * vol) * inputs.expiry,
            diffusion: vol * inputs.expiry.sqrt(),
            option_type,
        }
    }

    #[inline]
    fn payoff(&self, z: f64) -> f64 {
        let terminal = self.spot * (self.drift + self.diffusion * z).exp();
        self.option_type.intrinsic(terminal, self.strike)
    }
}

/// Monte Carlo pricer for European options.
///
/// Holds only its validated configuration; [`MonteCarloPricer::price_inputs`]
/// takes `&self` and allocates nothing that outlives the call.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketEnvironment;
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_pricing::method::PricingMethod;
///
/// let config = MonteCarloConfig::builder().n_paths(20_000).seed(42).build().unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, OptionType::Call).unwrap();
/// let market = MarketEnvironment::new(0.05, 0.2).unwrap();
///
/// let result = pricer.price(&contract, &market);
/// assert!((result.price - 10.45).abs() < 0.5);
/// assert_eq!(result.seed, Some(42));
/// assert!(result.std_error.unwrap() > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer after validating `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`MonteCarloConfig::validate`] failures.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices from flat inputs.
    ///
    /// Expired and zero-volatility inputs are deterministic: they return the
    /// closed-form regime value with a zero standard error and no sampling.
    pub fn price_inputs(&self, inputs: &BsmInputs, option_type: OptionType) -> PricingResult {
        timed(MethodKind::MonteCarlo, || {
            let seed = self.config.seed().unwrap_or_else(PricerRng::entropy_seed);
            if inputs.regime() != Regime::General {
                return (inputs.price(option_type), Some(0.0), Some(seed));
            }

            let stats = self.simulate(inputs, option_type, seed);
            let df = inputs.discount_factor();
            let price = df * stats.mean();
            let std_error = df * stats.std_error();

            tracing::debug!(
                price,
                std_error,
                seed,
                samples = stats.count(),
                "monte carlo estimate"
            );
            (price, Some(std_error), Some(seed))
        })
    }

    /// Runs every chunk and merges the accumulators in chunk order.
    fn simulate(&self, inputs: &BsmInputs, option_type: OptionType, seed: u64) -> PayoffAccumulator {
        let law = TerminalLaw::new(inputs, option_type);
        let n_chunks = self.config.n_chunks();

        let chunks: Vec<PayoffAccumulator> = if self.config.parallel() {
            (0..n_chunks)
                .into_par_iter()
                .map(|chunk| self.run_chunk(&law, seed, chunk))
                .collect()
        } else {
            (0..n_chunks)
                .map(|chunk| self.run_chunk(&law, seed, chunk))
                .collect()
        };

        let mut total = PayoffAccumulator::default();
        for chunk in &chunks {
            total.merge(chunk);
        }
        total
    }

    fn run_chunk(&self, law: &TerminalLaw, seed: u64, chunk: usize) -> PayoffAccumulator {
        let start = chunk * CHUNK_SIZE;
        let len = CHUNK_SIZE.min(self.config.n_paths() - start);
        let mut normals = vec![0.0; len];
        PricerRng::for_stream(seed, chunk as u64).fill_normal(&mut normals);
        let mut acc = PayoffAccumulator::default();

        if self.config.antithetic() {
            for &z in &normals {
                acc.push(0.5 * (law.payoff(z) + law.payoff(-z)));
            }
        } else {
            for &z in &normals {
                acc.push(law.payoff(z));
            }
        }
        acc
    }
}

impl PricingMethod for MonteCarloPricer {
    fn kind(&self) -> MethodKind {
        MethodKind::MonteCarlo
    }

    fn price(&self, contract: &OptionContract, market: &MarketEnvironment) -> PricingResult {
        self.price_inputs(
            &BsmInputs::from_parts(contract, market),
            contract.option_type(),
        )
    }
}

/// Monte Carlo price with zero dividend yield.
///
/// # Errors
///
/// `ConfigError::InvalidPathCount` if `n_paths` is outside `[1, 10_000_000]`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_pricing::mc::monte_carlo_price;
///
/// let a = monte_carlo_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put, 10_000, Some(7)).unwrap();
/// let b = monte_carlo_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put, 10_000, Some(7)).unwrap();
/// assert_eq!(a, b);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn monte_carlo_price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
    n_paths: usize,
    seed: Option<u64>,
) -> Result<f64, ConfigError> {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .maybe_seed(seed)
        .build()?;
    let inputs = BsmInputs::new(spot, strike, expiry, rate, volatility);
    Ok(MonteCarloPricer::new(config)?
        .price_inputs(&inputs, option_type)
        .price)
}
