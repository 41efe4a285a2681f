//! Comparison report types.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::method::{MethodKind, PricingResult};

/// One method's outcome within a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodMeasurement {
    /// Method that produced the price
    pub method: MethodKind,
    /// Present value
    pub price: f64,
    /// Wall-clock time
    pub elapsed: Duration,
    /// `|price - closed form|`
    pub abs_deviation: f64,
    /// Standard error (Monte Carlo only)
    pub std_error: Option<f64>,
    /// Seed used (Monte Carlo only)
    pub seed: Option<u64>,
}

impl MethodMeasurement {
    /// Measures `result` against the closed-form `reference`.
    pub fn from_result(result: &PricingResult, reference: f64) -> Self {
        Self {
            method: result.method,
            price: result.price,
            elapsed: result.elapsed,
            abs_deviation: (result.price - reference).abs(),
            std_error: result.std_error,
            seed: result.seed,
        }
    }
}

/// Prices of one option under every configured method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Closed-form price every deviation is measured against
    pub reference_price: f64,
    /// Per-method results in configuration order
    pub measurements: Vec<MethodMeasurement>,
}

impl ComparisonReport {
    /// Measurement for `method`, if it was run.
    pub fn get(&self, method: MethodKind) -> Option<&MethodMeasurement> {
        self.measurements.iter().find(|m| m.method == method)
    }

    /// Largest deviation from the reference over all methods.
    pub fn max_abs_deviation(&self) -> f64 {
        self.measurements
            .iter()
            .map(|m| m.abs_deviation)
            .fold(0.0, f64::max)
    }

    /// Sum of all elapsed times.
    pub fn total_elapsed(&self) -> Duration {
        self.measurements.iter().map(|m| m.elapsed).sum()
    }

    /// True when every method is within `tolerance` of the reference.
    pub fn agrees_within(&self, tolerance: f64) -> bool {
        self.max_abs_deviation() <= tolerance
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<14} {:>12} {:>12} {:>12}", "method", "price", "deviation", "time (ms)")?;
        for m in &self.measurements {
            writeln!(
                f,
                "{:<14} {:>12.6} {:>12.6} {:>12.3}",
                m.method.as_str(),
                m.price,
                m.abs_deviation,
                m.elapsed.as_secs_f64() * 1e3
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(method: MethodKind, price: f64, millis: u64) -> MethodMeasurement {
        let result = PricingResult {
            price,
            method,
            elapsed: Duration::from_millis(millis),
            std_error: None,
            seed: None,
        };
        MethodMeasurement::from_result(&result, 10.0)
    }

    fn report() -> ComparisonReport {
        ComparisonReport {
            reference_price: 10.0,
            measurements: vec![
                measurement(MethodKind::ClosedForm, 10.0, 1),
                measurement(MethodKind::Lattice, 10.25, 5),
                measurement(MethodKind::MonteCarlo, 9.5, 20),
            ],
        }
    }

    #[test]
    fn test_deviation_and_lookup() {
        let report = report();
        assert_eq!(report.get(MethodKind::Lattice).unwrap().abs_deviation, 0.25);
        assert_eq!(report.max_abs_deviation(), 0.5);
        assert!(report.agrees_within(0.5));
        assert!(!report.agrees_within(0.4));
    }

    #[test]
    fn test_total_elapsed() {
        assert_eq!(report().total_elapsed(), Duration::from_millis(26));
    }

    #[test]
    fn test_display_lists_every_method() {
        let text = report().to_string();
        assert!(text.contains("black_scholes"));
        assert!(text.contains("binomial"));
        assert!(text.contains("monte_carlo"));
        assert_eq!(text.lines().count(), 4);
    }
}
