//! Common pricing capability shared by every engine.
//!
//! All three methods (closed form, lattice, Monte Carlo) value the same
//! `(OptionContract, MarketEnvironment)` pair and return a [`PricingResult`].

use std::fmt;
use std::time::{Duration, Instant};

use pricer_core::market_data::MarketEnvironment;
use pricer_models::instruments::OptionContract;
use serde::{Deserialize, Serialize};

/// Identifies the pricing method that produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    /// Black-Scholes-Merton closed form.
    #[serde(rename = "black_scholes")]
    ClosedForm,
    /// Cox-Ross-Rubinstein binomial lattice.
    #[serde(rename = "binomial")]
    Lattice,
    /// Monte Carlo simulation of the terminal price.
    #[serde(rename = "monte_carlo")]
    MonteCarlo,
}

impl MethodKind {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodKind::ClosedForm => "black_scholes",
            MethodKind::Lattice => "binomial",
            MethodKind::MonteCarlo => "monte_carlo",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one pricing call.
///
/// Created fresh per call and never mutated afterwards.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use pricer_pricing::method::{MethodKind, PricingResult};
///
/// let result = PricingResult {
///     price: 10.45,
///     method: MethodKind::MonteCarlo,
///     elapsed: Duration::from_millis(12),
///     std_error: Some(0.05),
///     seed: Some(42),
/// };
/// assert!((result.confidence_95().unwrap() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Present value
    pub price: f64,
    /// Method that produced the value
    pub method: MethodKind,
    /// Wall-clock time of the computation
    pub elapsed: Duration,
    /// Standard error of the estimate (Monte Carlo only)
    pub std_error: Option<f64>,
    /// Seed the simulation ran with (Monte Carlo only)
    pub seed: Option<u64>,
}

impl PricingResult {
    /// Half-width of the 95% confidence interval, when a standard error exists.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.std_error.map(|se| 1.96 * se)
    }
}

/// Capability of valuing a European option.
///
/// Implementations are stateless between calls (`&self`) and infallible:
/// configuration errors are reported when the pricer is constructed.
pub trait PricingMethod {
    /// Which method this is.
    fn kind(&self) -> MethodKind;

    /// Values `contract` under `market`.
    fn price(&self, contract: &OptionContract, market: &MarketEnvironment) -> PricingResult;
}

/// Runs `compute` and wraps its value in a timed [`PricingResult`].
pub(crate) fn timed<F>(method: MethodKind, compute: F) -> PricingResult
where
    F: FnOnce() -> (f64, Option<f64>, Option<u64>),
{
    let start = Instant::now();
    let (price, std_error, seed) = compute();
    PricingResult {
        price,
        method,
        elapsed: start.elapsed(),
        std_error,
        seed,
    }
}
