//! Market environment: risk-free rate, dividend yield and volatility.

use crate::types::PricingError;

/// Flat market environment shared by every pricing method.
///
/// - `rate` (r): continuously compounded risk-free rate; may be negative
/// - `dividend_yield` (q): continuous dividend yield, `q >= 0`
/// - `volatility` (σ): annualised volatility, `σ >= 0`
///
/// `σ = 0` is a valid degenerate input handled by the pricers, not an error.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketEnvironment;
///
/// let market = MarketEnvironment::new(-0.005, 0.0).unwrap();
/// assert_eq!(market.rate(), -0.005);
///
/// // Negative volatility is rejected
/// assert!(MarketEnvironment::new(0.05, -0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketEnvironment {
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
}

impl MarketEnvironment {
    /// Creates a validated environment with zero dividend yield.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` if either value is non-finite or the
    /// volatility is negative.
    pub fn new(rate: f64, volatility: f64) -> Result<Self, PricingError> {
        let rate = PricingError::require_finite("rate", rate)?;
        let volatility = PricingError::require_finite("volatility", volatility)?;
        if volatility < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "volatility must be non-negative, got {}",
                volatility
            )));
        }
        Ok(Self {
            rate,
            dividend_yield: 0.0,
            volatility,
        })
    }

    /// Returns a copy with the given continuous dividend yield.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` if the yield is negative or non-finite.
    pub fn with_dividend_yield(self, dividend_yield: f64) -> Result<Self, PricingError> {
        let dividend_yield = PricingError::require_finite("dividend_yield", dividend_yield)?;
        if dividend_yield < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "dividend_yield must be non-negative, got {}",
                dividend_yield
            )));
        }
        Ok(Self {
            dividend_yield,
            ..self
        })
    }

    /// Risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Continuous dividend yield (q).
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}
