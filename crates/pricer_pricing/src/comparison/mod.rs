//! Cross-validation of the closed form, lattice and Monte Carlo methods.
//!
//! The harness prices one option with each configured engine, times every
//! call and reports each method's absolute deviation from the closed form.

pub mod config;
pub mod harness;
pub mod report;

pub use config::{ComparisonConfig, ComparisonConfigError};
pub use harness::{compare, ModelComparison};
pub use report::{ComparisonReport, MethodMeasurement};
