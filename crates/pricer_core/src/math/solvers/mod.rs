//! Root-finding solvers for numerical computation.
//!
//! This module provides bracketed root-finding designed for financial
//! applications such as implied volatility inversion, where the objective
//! is monotone but derivatives may vanish in the wings.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! The iteration budget is the only timeout: solvers never suspend and never
//! consult the wall clock.
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = BrentSolver::new(SolverConfig::default());
//!
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod brent;
mod config;

// Re-export public types at module level
pub use brent::{BrentSolver, Root};
pub use config::SolverConfig;
