//! # Pricer Models (L2: Business Logic)
//!
//! European option contracts and their closed-form valuation.
//!
//! This crate provides:
//! - Contract definitions: [`OptionType`](instruments::OptionType),
//!   [`OptionContract`](instruments::OptionContract)
//! - Black-Scholes-Merton pricing with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho)
//! - Implied volatility inversion by bracketed root-finding
//! - Mispricing metrics comparing market and model prices
//!
//! ## Design Principles
//!
//! - **Pure functions**: every formula is a function of its numeric inputs only
//! - **Degenerate inputs are policy, not errors**: `T = 0` and `σ = 0` have
//!   explicit formula branches
//! - **Explicit failure variants**: implied volatility returns a `Result`,
//!   never a NaN sentinel
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::black_scholes;
//! use pricer_models::instruments::OptionType;
//!
//! let call = black_scholes::price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! assert!(call > 10.0 && call < 11.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
