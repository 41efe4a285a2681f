//! Analytical Black-Scholes-Merton Greeks.
//!
//! Scaling conventions:
//! - Theta is per calendar day (annual theta / 365)
//! - Vega is per volatility point (/ 100)
//! - Rho is per rate point (/ 100)
//!
//! Greeks follow the same [`Regime`] dispatch as the price: at expiry only
//! delta survives as a moneyness indicator, and with zero volatility the
//! Greeks are those of the discounted intrinsic value.

use pricer_core::market_data::MarketEnvironment;

use super::black_scholes::{BsmInputs, Regime};
use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::{OptionContract, OptionType};

/// Calendar days per year used to scale theta.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Sensitivities of an option price.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::BsmInputs;
/// use pricer_models::instruments::OptionType;
///
/// let greeks = BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.2).greeks(OptionType::Call);
/// assert!(greeks.delta > 0.63 && greeks.delta < 0.64);
/// assert!(greeks.vega > 0.37 && greeks.vega < 0.38);
/// assert!(greeks.theta < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksBundle {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// -∂V/∂T per calendar day
    pub theta: f64,
    /// ∂V/∂σ per volatility point
    pub vega: f64,
    /// ∂V/∂r per rate point
    pub rho: f64,
}

impl GreeksBundle {
    /// Greeks of a validated contract in a market environment.
    pub fn for_contract(contract: &OptionContract, market: &MarketEnvironment) -> Self {
        BsmInputs::from_parts(contract, market).greeks(contract.option_type())
    }
}

impl BsmInputs {
    /// All five Greeks at once.
    pub fn greeks(&self, option_type: OptionType) -> GreeksBundle {
        GreeksBundle {
            delta: self.delta(option_type),
            gamma: self.gamma(),
            theta: self.theta(option_type),
            vega: self.vega(),
            rho: self.rho(option_type),
        }
    }

    /// Delta.
    ///
    /// - Call: e^(-qT)·N(d₁)
    /// - Put: e^(-qT)·(N(d₁) - 1)
    pub fn delta(&self, option_type: OptionType) -> f64 {
        match self.regime() {
            Regime::Expired => {
                if option_type.is_itm(self.spot, self.strike) {
                    option_type.phi()
                } else {
                    0.0
                }
            }
            Regime::VolatilityFree => {
                if option_type.is_itm(self.spot, self.strike) {
                    option_type.phi() * self.discount_factor()
                } else {
                    0.0
                }
            }
            Regime::General => {
                let nd1 = norm_cdf(self.d1());
                let df_q = self.dividend_discount_factor();
                match option_type {
                    OptionType::Call => df_q * nd1,
                    OptionType::Put => df_q * (nd1 - 1.0),
                }
            }
        }
    }

    /// Gamma: e^(-qT)·n(d₁) / (S·σ·√T). Same for calls and puts.
    pub fn gamma(&self) -> f64 {
        match self.regime() {
            Regime::Expired | Regime::VolatilityFree => 0.0,
            Regime::General => {
                let vol_sqrt_t = self.volatility * self.expiry.sqrt();
                self.dividend_discount_factor() * norm_pdf(self.d1()) / (self.spot * vol_sqrt_t)
            }
        }
    }

    /// Theta per calendar day.
    pub fn theta(&self, option_type: OptionType) -> f64 {
        match self.regime() {
            Regime::Expired => 0.0,
            // V = e^(-rT)·intrinsic decays at rate r towards expiry
            Regime::VolatilityFree => {
                self.rate * self.price(option_type) / DAYS_PER_YEAR
            }
            Regime::General => {
                let sqrt_t = self.expiry.sqrt();
                let d1 = self.d1();
                let d2 = d1 - self.volatility * sqrt_t;
                let forward_leg = self.spot * self.dividend_discount_factor();
                let strike_leg = self.strike * self.discount_factor();

                let decay = -forward_leg * norm_pdf(d1) * self.volatility / (2.0 * sqrt_t);
                let annual = match option_type {
                    OptionType::Call => {
                        decay - self.rate * strike_leg * norm_cdf(d2)
                            + self.dividend_yield * forward_leg * norm_cdf(d1)
                    }
                    OptionType::Put => {
                        decay + self.rate * strike_leg * norm_cdf(-d2)
                            - self.dividend_yield * forward_leg * norm_cdf(-d1)
                    }
                };
                annual / DAYS_PER_YEAR
            }
        }
    }

    /// Vega per volatility point: S·e^(-qT)·n(d₁)·√T / 100.
    pub fn vega(&self) -> f64 {
        match self.regime() {
            Regime::Expired | Regime::VolatilityFree => 0.0,
            Regime::General => {
                let sqrt_t = self.expiry.sqrt();
                self.spot * self.dividend_discount_factor() * norm_pdf(self.d1()) * sqrt_t / 100.0
            }
        }
    }

    /// Rho per rate point.
    ///
    /// - Call: K·T·e^(-rT)·N(d₂) / 100
    /// - Put: -K·T·e^(-rT)·N(-d₂) / 100
    pub fn rho(&self, option_type: OptionType) -> f64 {
        match self.regime() {
            Regime::Expired => 0.0,
            Regime::VolatilityFree => -self.expiry * self.price(option_type) / 100.0,
            Regime::General => {
                let d2 = self.d2();
                let k_t_df = self.strike * self.expiry * self.discount_factor();
                match option_type {
                    OptionType::Call => k_t_df * norm_cdf(d2) / 100.0,
                    OptionType::Put => -k_t_df * norm_cdf(-d2) / 100.0,
                }
            }
        }
    }
}

/// Delta with zero dividend yield.
#[inline]
pub fn delta(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    BsmInputs::new(spot, strike, expiry, rate, volatility).delta(option_type)
}

/// Gamma with zero dividend yield.
#[inline]
pub fn gamma(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> f64 {
    BsmInputs::new(spot, strike, expiry, rate, volatility).gamma()
}

/// Theta per calendar day with zero dividend yield.
#[inline]
pub fn theta(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    BsmInputs::new(spot, strike, expiry, rate, volatility).theta(option_type)
}

/// Vega per volatility point with zero dividend yield.
#[inline]
pub fn vega(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> f64 {
    BsmInputs::new(spot, strike, expiry, rate, volatility).vega()
}

/// Rho per rate point with zero dividend yield.
#[inline]
pub fn rho(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    BsmInputs::new(spot, strike, expiry, rate, volatility).rho(option_type)
}
