//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Solver types are reachable from `math::solvers`.
#[test]
fn test_solver_module_exports() {
    use pricer_core::math::solvers::{BrentSolver, Root, SolverConfig};

    let solver: BrentSolver<f64> = BrentSolver::new(SolverConfig::default());
    let root: Root<f64> = solver.solve(|x| x - 0.25, 0.0, 1.0).unwrap();
    assert!((root.x - 0.25).abs() < 1e-12);
}

/// Error types are reachable from both `types` and `types::error`.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::SolverError as ErrorPath;
    use pricer_core::types::{PricingError, SolverError};

    let err: ErrorPath = SolverError::MaxIterationsExceeded { iterations: 1 };
    assert!(matches!(err, ErrorPath::MaxIterationsExceeded { .. }));
    assert!(PricingError::require_finite("x", 1.0).is_ok());
}

/// Market environment is reachable from `market_data`.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::environment::MarketEnvironment as Direct;
    use pricer_core::market_data::MarketEnvironment;

    let market: Direct = MarketEnvironment::new(0.01, 0.15).unwrap();
    assert_eq!(market.volatility(), 0.15);
}

/// Solver errors propagate cleanly through `?` into boxed errors.
#[test]
fn test_errors_compose_with_question_mark() {
    use pricer_core::math::solvers::{BrentSolver, SolverConfig};

    fn run() -> Result<f64, Box<dyn std::error::Error>> {
        let solver = BrentSolver::new(SolverConfig::new(1e-12, 50)?);
        Ok(solver.find_root(|x: f64| x * x - 4.0, 0.0, 3.0)?)
    }

    let root = run().unwrap();
    assert!((root - 2.0).abs() < 1e-9);
}
