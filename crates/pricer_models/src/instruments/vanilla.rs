//! Vanilla option contract definition.

use super::error::InstrumentError;
use super::payoff::OptionType;

/// European vanilla option contract.
///
/// Immutable once constructed. The validating constructor enforces
/// `S > 0`, `K > 0`, `T >= 0` with all values finite; `T = 0` (an expired
/// option) is a valid degenerate input.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::new(100.0, 95.0, 0.5, OptionType::Call).unwrap();
/// assert_eq!(call.intrinsic(), 5.0);
///
/// // Negative expiry is rejected
/// assert!(OptionContract::new(100.0, 95.0, -0.5, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    expiry: f64,
    option_type: OptionType,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `spot` - Current price of the underlying (S > 0)
    /// * `strike` - Exercise price (K > 0)
    /// * `expiry` - Time to expiry in years (T >= 0)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `InvalidSpot`, `InvalidStrike` or `InvalidExpiry` naming the first
    /// offending value.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !expiry.is_finite() || expiry < 0.0 {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }
        Ok(Self::new_unchecked(spot, strike, expiry, option_type))
    }

    /// Creates a contract without validation.
    #[inline]
    pub fn new_unchecked(spot: f64, strike: f64, expiry: f64, option_type: OptionType) -> Self {
        Self {
            spot,
            strike,
            expiry,
            option_type,
        }
    }

    /// Spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Undiscounted intrinsic value at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Strictly in the money at the current spot.
    #[inline]
    pub fn is_itm(&self) -> bool {
        self.option_type.is_itm(self.spot, self.strike)
    }
}
