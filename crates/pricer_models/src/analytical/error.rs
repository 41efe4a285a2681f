//! Error types for implied volatility inversion.
//!
//! This module provides:
//! - `ImpliedVolError`: Reasons an observed price cannot be inverted

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

/// Implied volatility failures.
///
/// Every failure is an explicit variant; the solver never returns NaN.
///
/// # Variants
/// - `InvalidInput`: Market price is negative or non-finite
/// - `PriceOutOfRange`: Market price outside the prices attainable in the bracket
/// - `NoSignChange`: Objective has the same sign at both bracket ends
/// - `NotConverged`: Iteration budget exhausted
/// - `VolatilityInsensitive`: Price does not depend on volatility (e.g. `T = 0`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::ImpliedVolError;
///
/// let err = ImpliedVolError::PriceOutOfRange { market_price: 150.0, min_price: 0.0, max_price: 99.0 };
/// assert!(format!("{}", err).contains("150"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpliedVolError {
    /// Market price rejected before searching.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No volatility in the bracket reproduces the market price.
    #[error("Market price {market_price} outside attainable range [{min_price}, {max_price}]")]
    PriceOutOfRange {
        /// Observed price
        market_price: f64,
        /// Model price at the lower volatility bound
        min_price: f64,
        /// Model price at the upper volatility bound
        max_price: f64,
    },

    /// Objective does not change sign over the bracket.
    #[error("No sign change over volatility bracket [{lower}, {upper}]")]
    NoSignChange {
        /// Lower volatility bound
        lower: f64,
        /// Upper volatility bound
        upper: f64,
    },

    /// Root search ran out of iterations.
    #[error("Implied volatility did not converge after {iterations} iterations")]
    NotConverged {
        /// Iterations attempted
        iterations: usize,
    },

    /// Price is flat in volatility, so the inversion is ill-posed.
    #[error("Option price is insensitive to volatility")]
    VolatilityInsensitive,
}

impl From<SolverError> for ImpliedVolError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NoBracket { a, b } => ImpliedVolError::NoSignChange {
                lower: a.min(b),
                upper: a.max(b),
            },
            SolverError::MaxIterationsExceeded { iterations } => {
                ImpliedVolError::NotConverged { iterations }
            }
            SolverError::NumericalInstability(_) | SolverError::InvalidConfig(_) => {
                ImpliedVolError::InvalidInput(err.to_string())
            }
        }
    }
}

impl From<ImpliedVolError> for PricingError {
    fn from(err: ImpliedVolError) -> Self {
        match err {
            ImpliedVolError::InvalidInput(_) | ImpliedVolError::PriceOutOfRange { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            ImpliedVolError::NoSignChange { .. }
            | ImpliedVolError::NotConverged { .. }
            | ImpliedVolError::VolatilityInsensitive => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
