//! Numerical algorithms shared by the pricing layers.
//!
//! - [`solvers`]: Bracketed root-finding with configurable tolerance and iteration budget

pub mod solvers;
