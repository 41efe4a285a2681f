//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing inputs and solver operations
//!
//! # Re-exports
//!
//! - [`PricingError`], [`SolverError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{PricingError, SolverError};
