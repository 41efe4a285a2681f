//! Binomial lattice pricing of European options.
//!
//! An independent numerical check on the closed form: as the step count
//! grows the lattice price converges to Black-Scholes-Merton.

pub mod config;
pub mod tree;

pub use config::{LatticeConfig, DEFAULT_STEPS, MAX_STEPS};
pub use tree::{binomial_price, BinomialTree};
