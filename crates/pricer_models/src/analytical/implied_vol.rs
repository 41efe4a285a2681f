//! Implied volatility by bracketed root-finding.
//!
//! Solves `price(σ) - market_price = 0` over a volatility bracket with
//! Brent's method. The bracket endpoints are priced first so that prices
//! outside the attainable range, and inputs where the price does not depend
//! on volatility, are reported before any iteration runs.

use pricer_core::math::solvers::{BrentSolver, SolverConfig};
use pricer_core::types::SolverError;

use super::black_scholes::BsmInputs;
use super::error::ImpliedVolError;
use crate::instruments::OptionType;

/// Outcome of an implied volatility search.
pub type ImpliedVolResult = Result<f64, ImpliedVolError>;

/// Default lower volatility bound.
pub const DEFAULT_LOWER_BOUND: f64 = 1e-6;
/// Default upper volatility bound (500%).
pub const DEFAULT_UPPER_BOUND: f64 = 5.0;

/// Search settings for [`ImpliedVolSolver`].
///
/// # Examples
/// ```
/// use pricer_models::analytical::implied_vol::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::default();
/// assert_eq!(config.bounds(), (1e-6, 5.0));
/// assert_eq!(config.solver().max_iterations, 100);
///
/// let wide = ImpliedVolConfig::builder().upper_bound(10.0).build().unwrap();
/// assert_eq!(wide.bounds(), (1e-6, 10.0));
///
/// // An empty bracket is rejected
/// assert!(ImpliedVolConfig::builder().lower_bound(2.0).upper_bound(1.0).build().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig {
    lower_bound: f64,
    upper_bound: f64,
    solver: SolverConfig<f64>,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            solver: SolverConfig::default(),
        }
    }
}

impl ImpliedVolConfig {
    /// Starts a builder initialised with the defaults.
    #[inline]
    pub fn builder() -> ImpliedVolConfigBuilder {
        ImpliedVolConfigBuilder::default()
    }

    /// Volatility bracket `(lower, upper)`.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    /// Root-finder settings.
    #[inline]
    pub fn solver(&self) -> &SolverConfig<f64> {
        &self.solver
    }

    /// Checks the bracket and the solver settings.
    pub fn validate(&self) -> Result<(), SolverError> {
        self.solver.validate()?;
        if !self.lower_bound.is_finite()
            || !self.upper_bound.is_finite()
            || self.lower_bound <= 0.0
            || self.lower_bound >= self.upper_bound
        {
            return Err(SolverError::InvalidConfig(format!(
                "volatility bracket must satisfy 0 < lower < upper, got [{}, {}]",
                self.lower_bound, self.upper_bound
            )));
        }
        Ok(())
    }
}

/// Builder for [`ImpliedVolConfig`].
#[derive(Debug, Clone, Default)]
pub struct ImpliedVolConfigBuilder {
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
}

impl ImpliedVolConfigBuilder {
    /// Lower volatility bound (default 1e-6).
    #[inline]
    pub fn lower_bound(mut self, lower_bound: f64) -> Self {
        self.lower_bound = Some(lower_bound);
        self
    }

    /// Upper volatility bound (default 5.0).
    #[inline]
    pub fn upper_bound(mut self, upper_bound: f64) -> Self {
        self.upper_bound = Some(upper_bound);
        self
    }

    /// Iteration budget (default 100).
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Convergence tolerance on price residual and bracket width (default 1e-10).
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    /// `SolverError::InvalidConfig` for an empty or non-positive bracket,
    /// a non-positive tolerance or a zero iteration budget.
    pub fn build(self) -> Result<ImpliedVolConfig, SolverError> {
        let defaults = ImpliedVolConfig::default();
        let solver = SolverConfig::new(
            self.tolerance.unwrap_or(defaults.solver.tolerance),
            self.max_iterations.unwrap_or(defaults.solver.max_iterations),
        )?;
        let config = ImpliedVolConfig {
            lower_bound: self.lower_bound.unwrap_or(defaults.lower_bound),
            upper_bound: self.upper_bound.unwrap_or(defaults.upper_bound),
            solver,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Implied volatility solver.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::BsmInputs;
/// use pricer_models::analytical::implied_vol::{ImpliedVolConfig, ImpliedVolSolver};
/// use pricer_models::instruments::OptionType;
///
/// let solver = ImpliedVolSolver::new(ImpliedVolConfig::default());
/// let inputs = BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.25).with_dividend_yield(0.02);
/// let market_price = inputs.price(OptionType::Put);
///
/// let vol = solver.solve(&inputs, OptionType::Put, market_price).unwrap();
/// assert!((vol - 0.25).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    config: ImpliedVolConfig,
    brent: BrentSolver<f64>,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::new(ImpliedVolConfig::default())
    }
}

impl ImpliedVolSolver {
    /// Creates a solver from a validated configuration.
    pub fn new(config: ImpliedVolConfig) -> Self {
        Self {
            brent: BrentSolver::new(config.solver),
            config,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Finds σ such that the model price equals `market_price`.
    ///
    /// The `volatility` field of `inputs` is ignored; every other field,
    /// including the dividend yield, is held fixed during the search.
    ///
    /// # Errors
    /// - `InvalidInput` if `market_price` is negative or non-finite
    /// - `VolatilityInsensitive` if the bracket endpoints price identically,
    ///   or the price is within tolerance of the lower-bound price without
    ///   matching it (vanishing vega, e.g. deep out of the money near expiry)
    /// - `PriceOutOfRange` if `market_price` is outside the endpoint prices
    /// - `NoSignChange` / `NotConverged` from the root search
    pub fn solve(
        &self,
        inputs: &BsmInputs,
        option_type: OptionType,
        market_price: f64,
    ) -> ImpliedVolResult {
        if !market_price.is_finite() || market_price < 0.0 {
            return Err(ImpliedVolError::InvalidInput(format!(
                "market price must be finite and non-negative, got {}",
                market_price
            )));
        }

        let (lower, upper) = self.config.bounds();
        let price_at = |vol: f64| inputs.with_volatility(vol).price(option_type);
        let min_price = price_at(lower);
        let max_price = price_at(upper);

        if max_price - min_price <= f64::EPSILON * max_price.abs().max(1.0) {
            return Err(ImpliedVolError::VolatilityInsensitive);
        }
        if market_price < min_price || market_price > max_price {
            return Err(ImpliedVolError::PriceOutOfRange {
                market_price,
                min_price,
                max_price,
            });
        }

        // A residual already below tolerance at the lower bound, but not zero,
        // means the price is numerically flat there and σ cannot be resolved.
        let residual_at_lower = min_price - market_price;
        if residual_at_lower != 0.0 && residual_at_lower.abs() < self.config.solver.tolerance {
            return Err(ImpliedVolError::VolatilityInsensitive);
        }

        let root = self
            .brent
            .solve(|vol| price_at(vol) - market_price, lower, upper)?;

        tracing::debug!(
            implied_vol = root.x,
            iterations = root.iterations,
            market_price,
            "implied volatility converged"
        );
        Ok(root.x)
    }
}

/// Implied volatility with zero dividend yield and default settings.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::analytical::implied_vol::implied_volatility;
/// use pricer_models::analytical::ImpliedVolError;
/// use pricer_models::instruments::OptionType;
///
/// let market = price(100.0, 110.0, 0.5, 0.03, 0.35, OptionType::Call);
/// let vol = implied_volatility(100.0, 110.0, 0.5, 0.03, market, OptionType::Call).unwrap();
/// assert!((vol - 0.35).abs() < 1e-4);
///
/// // A call cannot be worth more than the spot
/// let err = implied_volatility(100.0, 110.0, 0.5, 0.03, 150.0, OptionType::Call).unwrap_err();
/// assert!(matches!(err, ImpliedVolError::PriceOutOfRange { .. }));
/// ```
pub fn implied_volatility(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    market_price: f64,
    option_type: OptionType,
) -> ImpliedVolResult {
    let inputs = BsmInputs::new(spot, strike, expiry, rate, DEFAULT_LOWER_BOUND);
    ImpliedVolSolver::default().solve(&inputs, option_type, market_price)
}

/// Implied volatilities across a strike chain.
///
/// Inverts each `(strike, market_price)` quote independently with the
/// default settings and zero dividend yield. The output has one entry per
/// quote, in input order; a quote that cannot be inverted yields its error
/// without affecting the others.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::analytical::implied_vol::implied_volatility_chain;
/// use pricer_models::instruments::OptionType;
///
/// let quotes: Vec<(f64, f64)> = [90.0, 100.0, 110.0]
///     .iter()
///     .map(|&k| (k, price(100.0, k, 0.5, 0.02, 0.3, OptionType::Put)))
///     .chain(std::iter::once((120.0, 500.0)))
///     .collect();
///
/// let smile = implied_volatility_chain(100.0, 0.5, 0.02, &quotes, OptionType::Put);
/// assert_eq!(smile.len(), 4);
/// assert!(smile[..3].iter().all(|iv| (iv.as_ref().unwrap() - 0.3).abs() < 1e-6));
/// assert!(smile[3].is_err());
/// ```
pub fn implied_volatility_chain(
    spot: f64,
    expiry: f64,
    rate: f64,
    quotes: &[(f64, f64)],
    option_type: OptionType,
) -> Vec<ImpliedVolResult> {
    let solver = ImpliedVolSolver::default();
    let results: Vec<ImpliedVolResult> = quotes
        .iter()
        .map(|&(strike, market_price)| {
            let inputs = BsmInputs::new(spot, strike, expiry, rate, DEFAULT_LOWER_BOUND);
            solver.solve(&inputs, option_type, market_price)
        })
        .collect();

    let failures = results.iter().filter(|r| r.is_err()).count();
    if failures > 0 {
        tracing::debug!(
            quotes = quotes.len(),
            failures,
            "implied volatility chain has uninvertible quotes"
        );
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes::price;
    use approx::assert_abs_diff_eq;

    // ========================================
    // Configuration Tests
    // ========================================

    #[test]
    fn test_builder_overrides() {
        let config = ImpliedVolConfig::builder()
            .lower_bound(0.01)
            .upper_bound(3.0)
            .max_iterations(50)
            .tolerance(1e-12)
            .build()
            .unwrap();
        assert_eq!(config.bounds(), (0.01, 3.0));
        assert_eq!(config.solver().max_iterations, 50);
        assert_eq!(config.solver().tolerance, 1e-12);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        assert!(ImpliedVolConfig::builder().lower_bound(0.0).build().is_err());
        assert!(ImpliedVolConfig::builder().upper_bound(f64::INFINITY).build().is_err());
        assert!(ImpliedVolConfig::builder().max_iterations(0).build().is_err());
        assert!(ImpliedVolConfig::builder().tolerance(-1.0).build().is_err());
    }

    // ========================================
    // Solve Tests
    // ========================================

    #[test]
    fn test_round_trip_both_kinds() {
        let solver = ImpliedVolSolver::default();
        for vol in [0.05, 0.2, 0.8, 2.0] {
            for kind in OptionType::ALL {
                let inputs = BsmInputs::new(100.0, 95.0, 1.0, 0.05, vol);
                let market = inputs.price(kind);
                let implied = solver.solve(&inputs, kind, market).unwrap();
                assert_abs_diff_eq!(implied, vol, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_price_above_range() {
        let err = implied_volatility(100.0, 100.0, 1.0, 0.05, 200.0, OptionType::Call).unwrap_err();
        match err {
            ImpliedVolError::PriceOutOfRange {
                market_price,
                min_price,
                max_price,
            } => {
                assert_eq!(market_price, 200.0);
                assert!(min_price < max_price);
                assert!(max_price < 100.0);
            }
            other => panic!("Expected PriceOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_price_below_range() {
        // Below the σ → 0 value S - K·e^(-rT) ≈ 14.88
        let result = implied_volatility(110.0, 100.0, 1.0, 0.05, 5.0, OptionType::Call);
        assert!(matches!(result, Err(ImpliedVolError::PriceOutOfRange { .. })));
    }

    #[test]
    fn test_expired_is_volatility_insensitive() {
        let result = implied_volatility(110.0, 100.0, 0.0, 0.05, 10.0, OptionType::Call);
        assert_eq!(result, Err(ImpliedVolError::VolatilityInsensitive));
    }

    #[test]
    fn test_flat_price_near_lower_bound_is_insensitive() {
        // Deep out of the money a day before expiry: the σ = 1 price is about
        // 2e-12 while the lower-bound price is exactly zero
        let inputs = BsmInputs::new(50.0, 100.0, 0.01, 0.0, 1.0);
        let market = inputs.price(OptionType::Call);
        assert!(market > 0.0 && market < 1e-10);

        let result = ImpliedVolSolver::default().solve(&inputs, OptionType::Call, market);
        assert_eq!(result, Err(ImpliedVolError::VolatilityInsensitive));
    }

    #[test]
    fn test_price_equal_to_lower_bound_price_solves() {
        let inputs = BsmInputs::new(100.0, 100.0, 1.0, 0.05, DEFAULT_LOWER_BOUND);
        let market = inputs.price(OptionType::Call);
        let implied = ImpliedVolSolver::default()
            .solve(&inputs, OptionType::Call, market)
            .unwrap();
        assert_abs_diff_eq!(implied, DEFAULT_LOWER_BOUND, epsilon = 1e-9);
    }

    #[test]
    fn test_chain_keeps_order_and_isolates_failures() {
        let quotes = [
            (80.0, price(100.0, 80.0, 1.0, 0.05, 0.4, OptionType::Call)),
            (100.0, -1.0),
            (120.0, price(100.0, 120.0, 1.0, 0.05, 0.25, OptionType::Call)),
            (100.0, 150.0),
        ];
        let chain = implied_volatility_chain(100.0, 1.0, 0.05, &quotes, OptionType::Call);

        assert_eq!(chain.len(), 4);
        assert_abs_diff_eq!(*chain[0].as_ref().unwrap(), 0.4, epsilon = 1e-6);
        assert!(matches!(chain[1], Err(ImpliedVolError::InvalidInput(_))));
        assert_abs_diff_eq!(*chain[2].as_ref().unwrap(), 0.25, epsilon = 1e-6);
        assert!(matches!(chain[3], Err(ImpliedVolError::PriceOutOfRange { .. })));
    }

    #[test]
    fn test_empty_chain() {
        assert!(implied_volatility_chain(100.0, 1.0, 0.05, &[], OptionType::Put).is_empty());
    }

    #[test]
    fn test_invalid_market_price() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let result = implied_volatility(100.0, 100.0, 1.0, 0.05, bad, OptionType::Put);
            assert!(matches!(result, Err(ImpliedVolError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_not_converged_with_tiny_budget() {
        let config = ImpliedVolConfig::builder()
            .max_iterations(2)
            .tolerance(1e-15)
            .build()
            .unwrap();
        let solver = ImpliedVolSolver::new(config);
        let inputs = BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let market = inputs.price(OptionType::Call);

        let result = solver.solve(&inputs, OptionType::Call, market);
        assert_eq!(result, Err(ImpliedVolError::NotConverged { iterations: 2 }));
    }

    #[test]
    fn test_respects_dividend_yield() {
        let inputs = BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.3).with_dividend_yield(0.04);
        let market = inputs.price(OptionType::Call);

        let with_yield = ImpliedVolSolver::default()
            .solve(&inputs, OptionType::Call, market)
            .unwrap();
        assert_abs_diff_eq!(with_yield, 0.3, epsilon = 1e-6);

        // Ignoring the yield gives a different answer
        let without = implied_volatility(100.0, 100.0, 1.0, 0.05, market, OptionType::Call).unwrap();
        assert!((without - 0.3).abs() > 1e-3);
    }
}
