//! # Random Number Generation
//!
//! Seeded pseudo-random streams for Monte Carlo simulation.
//!
//! - **Reproducibility**: every generator is built from an explicit seed
//! - **Stream partitioning**: chunk `i` of a simulation draws from stream
//!   `(seed, i)`, which makes parallel runs bit-identical to sequential ones
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! let mut buffer = vec![0.0; 1000];
//! PricerRng::for_stream(12345, 0).fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
