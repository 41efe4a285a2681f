//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is built on a full-precision complementary error function, so
//! tail values keep their relative accuracy instead of saturating at 0 or 1.

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(0.35), 0.6368306511756191, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_cdf_tails() {
        // Φ(-10) ≈ 7.62e-24, resolved rather than rounded to zero
        let tail = norm_cdf(-10.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 7.619853024160527e-24, max_relative = 1e-8);

        assert_eq!(norm_cdf(-40.0), 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let mut prev = norm_cdf(-8.0);
        for i in -79..=80 {
            let current = norm_cdf(i as f64 * 0.1);
            assert!(current >= prev);
            prev = current;
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), 0.3989422804014327, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0), 0.24197072451914337, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(-1.0), norm_pdf(1.0));
    }

    #[test]
    fn test_norm_pdf_is_cdf_derivative() {
        let h = 1e-6;
        for x in [-2.0, -0.5, 0.0, 0.7, 1.5] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-8);
        }
    }
}
