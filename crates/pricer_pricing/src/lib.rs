//! # Pricer Pricing (Layer 3: Engines)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing provides the numerical engines that cross-check the
//! closed form from `pricer_models`:
//! - Cox-Ross-Rubinstein binomial lattice (`lattice`)
//! - Monte Carlo simulation with seeded, partitioned RNG streams (`mc`, `rng`)
//! - The [`PricingMethod`](method::PricingMethod) capability and the
//!   [`PricingEngine`](engine::PricingEngine) enum over all three methods
//! - A comparison harness with a TOML-loadable configuration (`comparison`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::OptionType;
//! use pricer_pricing::comparison::compare;
//! use pricer_pricing::method::MethodKind;
//!
//! let report = compare(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//!
//! let lattice = report.get(MethodKind::Lattice).unwrap();
//! assert!(lattice.abs_deviation < 0.5);
//! println!("{}", report);
//! ```
//!
//! ## Concurrency
//!
//! Every engine is `Send + Sync` and prices through `&self`. Monte Carlo
//! can spread its chunks over the rayon pool; results do not depend on
//! whether it does.
//!
//! ## Logging
//!
//! Engines emit `tracing` events (`debug` per measurement, `info` per
//! comparison, `warn` for a lattice whose risk-neutral probability leaves
//! `[0, 1]`). No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod comparison;
pub mod engine;
pub mod error;
pub mod lattice;
pub mod mc;
pub mod method;
pub mod rng;
