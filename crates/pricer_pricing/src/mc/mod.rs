//! Monte Carlo pricing of European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (path count, seed, antithetic, parallel)
//! └── price_inputs()
//!     ├── PricerRng::for_stream(seed, chunk)   per fixed-size chunk
//!     ├── terminal GBM sample and payoff       per path
//!     └── PayoffAccumulator::merge             in chunk order
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_models::analytical::black_scholes::BsmInputs;
//! use pricer_models::instruments::OptionType;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let inputs = BsmInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let call = pricer.price_inputs(&inputs, OptionType::Call);
//! let put = pricer.price_inputs(&inputs, OptionType::Put);
//! assert!(call.price > put.price);
//! ```

pub mod config;
pub mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use pricer::{monte_carlo_price, MonteCarloPricer, PayoffAccumulator};
