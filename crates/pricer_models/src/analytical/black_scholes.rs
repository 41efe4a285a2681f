//! Black-Scholes-Merton pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Regimes
//!
//! Two input regions have their own branch instead of relying on the
//! limiting behaviour of d₁:
//! - `T <= 0`: undiscounted intrinsic value
//! - `σ <= 0` with `T > 0`: discounted intrinsic value `e^(-rT)·max(φ(S - K), 0)`
//!
//! Every function here is total over finite input and never fails.

use pricer_core::market_data::MarketEnvironment;

use super::distributions::norm_cdf;
use crate::instruments::{OptionContract, OptionType};

/// Input region that selects the pricing branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `T <= 0`: the option pays its intrinsic value now.
    Expired,
    /// `σ <= 0` with `T > 0`: deterministic terminal payoff, discounted.
    VolatilityFree,
    /// `T > 0` and `σ > 0`: full lognormal formula.
    General,
}

impl Regime {
    /// Classifies an (expiry, volatility) pair.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::black_scholes::Regime;
    ///
    /// assert_eq!(Regime::classify(0.0, 0.2), Regime::Expired);
    /// assert_eq!(Regime::classify(1.0, 0.0), Regime::VolatilityFree);
    /// assert_eq!(Regime::classify(1.0, 0.2), Regime::General);
    /// ```
    #[inline]
    pub fn classify(expiry: f64, volatility: f64) -> Self {
        if expiry <= 0.0 {
            Regime::Expired
        } else if volatility <= 0.0 {
            Regime::VolatilityFree
        } else {
            Regime::General
        }
    }
}

/// Flat Black-Scholes-Merton inputs for one underlying.
///
/// The option kind is passed per call so one set of inputs can value
/// both the call and the put.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::BsmInputs;
/// use pricer_models::instruments::OptionType;
///
/// let inputs = BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let call = inputs.price(OptionType::Call);
/// let put = inputs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
///
/// // A dividend yield lowers the call value
/// let with_yield = inputs.with_dividend_yield(0.03);
/// assert!(with_yield.price(OptionType::Call) < call);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BsmInputs {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Continuous dividend yield (q)
    pub dividend_yield: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
}

impl BsmInputs {
    /// Creates inputs with zero dividend yield.
    #[inline]
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            dividend_yield: 0.0,
            volatility,
        }
    }

    /// Combines a contract with a market environment.
    #[inline]
    pub fn from_parts(contract: &OptionContract, market: &MarketEnvironment) -> Self {
        Self {
            spot: contract.spot(),
            strike: contract.strike(),
            expiry: contract.expiry(),
            rate: market.rate(),
            dividend_yield: market.dividend_yield(),
            volatility: market.volatility(),
        }
    }

    /// Returns a copy with the given continuous dividend yield.
    #[inline]
    pub fn with_dividend_yield(self, dividend_yield: f64) -> Self {
        Self {
            dividend_yield,
            ..self
        }
    }

    /// Returns a copy with the given volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Branch used by [`BsmInputs::price`] and the Greeks.
    #[inline]
    pub fn regime(&self) -> Regime {
        Regime::classify(self.expiry, self.volatility)
    }

    /// Discount factor `e^(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Dividend discount factor `e^(-qT)`.
    #[inline]
    pub fn dividend_discount_factor(&self) -> f64 {
        (-self.dividend_yield * self.expiry).exp()
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// Only meaningful in the [`Regime::General`] region.
    #[inline]
    pub fn d1(&self) -> f64 {
        let vol_sqrt_t = self.volatility * self.expiry.sqrt();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility)
            * self.expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.expiry.sqrt()
    }

    /// Theoretical price of a European option of the given kind.
    pub fn price(&self, option_type: OptionType) -> f64 {
        match self.regime() {
            Regime::Expired => option_type.intrinsic(self.spot, self.strike),
            Regime::VolatilityFree => {
                self.discount_factor() * option_type.intrinsic(self.spot, self.strike)
            }
            Regime::General => {
                let d1 = self.d1();
                let d2 = d1 - self.volatility * self.expiry.sqrt();
                let forward_leg = self.spot * self.dividend_discount_factor();
                let strike_leg = self.strike * self.discount_factor();
                match option_type {
                    OptionType::Call => forward_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
                    OptionType::Put => strike_leg * norm_cdf(-d2) - forward_leg * norm_cdf(-d1),
                }
            }
        }
    }
}

/// Black-Scholes price with zero dividend yield.
///
/// # Arguments
/// * `spot` - Current underlying price (S)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiry in years (T)
/// * `rate` - Risk-free rate (r)
/// * `volatility` - Volatility (σ)
/// * `option_type` - Call or put
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::instruments::OptionType;
///
/// // Expired call pays intrinsic
/// assert_eq!(price(120.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 20.0);
///
/// let put = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
/// assert!(put > 5.0 && put < 6.0);
/// ```
#[inline]
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    BsmInputs::new(spot, strike, expiry, rate, volatility).price(option_type)
}

/// Prices a validated contract in a market environment.
#[inline]
pub fn price_contract(contract: &OptionContract, market: &MarketEnvironment) -> f64 {
    BsmInputs::from_parts(contract, market).price(contract.option_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm() -> BsmInputs {
        BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    // ========================================
    // Regime Tests
    // ========================================

    #[test]
    fn test_regime_classification() {
        assert_eq!(Regime::classify(-1.0, 0.2), Regime::Expired);
        assert_eq!(Regime::classify(0.0, 0.0), Regime::Expired);
        assert_eq!(Regime::classify(0.5, -0.1), Regime::VolatilityFree);
        assert_eq!(Regime::classify(0.5, 1e-8), Regime::General);
    }

    #[test]
    fn test_expired_pays_intrinsic() {
        assert_eq!(price(120.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 20.0);
        assert_eq!(price(80.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put), 20.0);
        assert_eq!(price(80.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 0.0);
        assert_eq!(price(120.0, 100.0, -0.5, 0.05, 0.2, OptionType::Put), 0.0);
    }

    #[test]
    fn test_zero_volatility_discounts_intrinsic() {
        let call = price(100.0, 90.0, 1.0, 0.05, 0.0, OptionType::Call);
        assert_relative_eq!(call, (-0.05_f64).exp() * 10.0, epsilon = 1e-12);

        let put = price(100.0, 90.0, 1.0, 0.05, 0.0, OptionType::Put);
        assert_eq!(put, 0.0);

        let put_itm = price(80.0, 90.0, 2.0, 0.03, 0.0, OptionType::Put);
        assert_relative_eq!(put_itm, (-0.06_f64).exp() * 10.0, epsilon = 1e-12);
    }

    // ========================================
    // General Regime Tests
    // ========================================

    #[test]
    fn test_reference_values() {
        // Hull, textbook ATM case
        let inputs = atm();
        assert_relative_eq!(inputs.price(OptionType::Call), 10.450583572185565, epsilon = 1e-9);
        assert_relative_eq!(inputs.price(OptionType::Put), 5.573526022256971, epsilon = 1e-9);
    }

    #[test]
    fn test_d1_d2() {
        let inputs = atm();
        assert_relative_eq!(inputs.d1(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(inputs.d2(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_put_call_parity_with_dividend() {
        let inputs = BsmInputs::new(105.0, 95.0, 0.75, 0.04, 0.3).with_dividend_yield(0.02);
        let call = inputs.price(OptionType::Call);
        let put = inputs.price(OptionType::Put);
        let forward = 105.0 * inputs.dividend_discount_factor() - 95.0 * inputs.discount_factor();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    #[test]
    fn test_negative_rate_is_priced() {
        let call = price(100.0, 100.0, 1.0, -0.01, 0.2, OptionType::Call);
        let put = price(100.0, 100.0, 1.0, -0.01, 0.2, OptionType::Put);
        assert!(call.is_finite() && put.is_finite());
        assert!(put > call);
    }

    #[test]
    fn test_deep_itm_call_approaches_forward() {
        let call = price(1000.0, 1.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert_relative_eq!(call, 1000.0 - (-0.05_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_contract_and_market() {
        let contract = OptionContract::new(100.0, 100.0, 1.0, OptionType::Call).unwrap();
        let market = MarketEnvironment::new(0.05, 0.2).unwrap();
        assert_relative_eq!(
            price_contract(&contract, &market),
            atm().price(OptionType::Call),
            epsilon = 1e-15
        );
    }
}
