//! Analytical valuation of European options.
//!
//! This module provides:
//! - Standard normal CDF/PDF (`distributions`)
//! - Black-Scholes-Merton closed form with regime dispatch (`black_scholes`)
//! - Analytical Greeks (`greeks`)
//! - Implied volatility inversion (`implied_vol`)
//! - Market-versus-model deviation metrics (`mispricing`)

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;
pub mod implied_vol;
pub mod mispricing;

// Re-export main types at module level
pub use black_scholes::{BsmInputs, Regime};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::ImpliedVolError;
pub use greeks::GreeksBundle;
pub use implied_vol::{
    implied_volatility, implied_volatility_chain, ImpliedVolConfig, ImpliedVolResult,
    ImpliedVolSolver,
};
