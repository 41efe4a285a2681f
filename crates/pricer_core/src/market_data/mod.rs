//! Market inputs consumed by the pricing layers.
//!
//! The market-data collaborator supplies a risk-free rate proxy, an implied
//! volatility proxy and optionally a dividend yield as plain numbers; this
//! module bundles them into a validated value type.
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketEnvironment;
//!
//! let market = MarketEnvironment::new(0.05, 0.2).unwrap();
//! assert_eq!(market.dividend_yield(), 0.0);
//! ```

pub mod environment;

// Re-export commonly used types
pub use environment::MarketEnvironment;
