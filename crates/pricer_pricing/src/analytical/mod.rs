//! Closed-form reference engine.
//!
//! Adapts the Black-Scholes-Merton formula from `pricer_models` to the
//! [`PricingMethod`] capability so it can sit alongside the numerical engines.

use pricer_core::market_data::MarketEnvironment;
use pricer_models::analytical::black_scholes;
use pricer_models::instruments::OptionContract;

use crate::method::{timed, MethodKind, PricingMethod, PricingResult};

/// Black-Scholes-Merton pricer.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketEnvironment;
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_pricing::analytical::ClosedFormPricer;
/// use pricer_pricing::method::PricingMethod;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, OptionType::Call).unwrap();
/// let market = MarketEnvironment::new(0.05, 0.2).unwrap();
///
/// let result = ClosedFormPricer.price(&contract, &market);
/// assert!(result.price > 10.0 && result.price < 11.0);
/// assert!(result.std_error.is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClosedFormPricer;

impl PricingMethod for ClosedFormPricer {
    fn kind(&self) -> MethodKind {
        MethodKind::ClosedForm
    }

    fn price(&self, contract: &OptionContract, market: &MarketEnvironment) -> PricingResult {
        timed(MethodKind::ClosedForm, || {
            (black_scholes::price_contract(contract, market), None, None)
        })
    }
}
