//! # pricer_core: Numerical Foundation for the Option Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the 3-layer architecture, providing:
//! - Root-finding solvers (`math::solvers`)
//! - Market environment value type: rate, dividend yield, volatility (`market_data`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketEnvironment;
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Market environment with a continuous dividend yield
//! let market = MarketEnvironment::new(0.05, 0.2).unwrap().with_dividend_yield(0.01).unwrap();
//! assert_eq!(market.volatility(), 0.2);
//!
//! // Bracketed root-finding
//! let solver = BrentSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! # assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `MarketEnvironment` and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
