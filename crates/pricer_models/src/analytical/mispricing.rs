//! Market-versus-model deviation metrics.
//!
//! Used to flag options whose observed price strays from the theoretical
//! value by more than a percentage threshold.

/// Ceiling applied to every deviation, in percent.
pub const MAX_DEVIATION_PCT: f64 = 1000.0;

/// Theoretical prices below this are treated as effectively zero.
pub const MIN_THEORETICAL_PRICE: f64 = 0.01;

/// Default mispricing threshold, in percent.
pub const DEFAULT_THRESHOLD_PCT: f64 = 25.0;

/// Absolute percentage deviation of `market` from `theoretical`.
///
/// - `theoretical <= 0`: 0
/// - `theoretical < 0.01`: 0 if `market < 0.01`, otherwise the cap
/// - otherwise `|market - theoretical| / theoretical * 100`, capped at 1000
///
/// # Examples
/// ```
/// use pricer_models::analytical::mispricing::price_deviation_pct;
///
/// assert_eq!(price_deviation_pct(12.5, 10.0), 25.0);
/// assert_eq!(price_deviation_pct(1.0, 0.001), 1000.0);
/// assert_eq!(price_deviation_pct(5.0, 0.0), 0.0);
/// ```
pub fn price_deviation_pct(market: f64, theoretical: f64) -> f64 {
    if theoretical <= 0.0 {
        return 0.0;
    }
    if theoretical < MIN_THEORETICAL_PRICE {
        return if market < MIN_THEORETICAL_PRICE {
            0.0
        } else {
            MAX_DEVIATION_PCT
        };
    }
    ((market - theoretical).abs() / theoretical * 100.0).min(MAX_DEVIATION_PCT)
}

/// True when the deviation strictly exceeds `threshold_pct`.
#[inline]
pub fn is_mispriced(market: f64, theoretical: f64, threshold_pct: f64) -> bool {
    price_deviation_pct(market, theoretical) > threshold_pct
}

/// Representative market price of a quote.
///
/// Mid of bid and ask when both are positive, otherwise the last trade.
///
/// # Examples
/// ```
/// use pricer_models::analytical::mispricing::mid_price;
///
/// assert_eq!(mid_price(1.0, 1.2, 1.5), 1.1);
/// assert_eq!(mid_price(0.0, 1.2, 1.5), 1.5);
/// ```
#[inline]
pub fn mid_price(bid: f64, ask: f64, last: f64) -> f64 {
    if bid > 0.0 && ask > 0.0 {
        0.5 * (bid + ask)
    } else {
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deviation_regular() {
        assert_relative_eq!(price_deviation_pct(9.0, 10.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(price_deviation_pct(11.0, 10.0), 10.0, epsilon = 1e-12);
        assert_eq!(price_deviation_pct(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_deviation_cap() {
        assert_eq!(price_deviation_pct(500.0, 1.0), MAX_DEVIATION_PCT);
    }

    #[test]
    fn test_deviation_tiny_theoretical() {
        assert_eq!(price_deviation_pct(0.005, 0.001), 0.0);
        assert_eq!(price_deviation_pct(0.01, 0.001), MAX_DEVIATION_PCT);
        assert_eq!(price_deviation_pct(3.0, -1.0), 0.0);
    }

    #[test]
    fn test_is_mispriced() {
        assert!(is_mispriced(13.0, 10.0, DEFAULT_THRESHOLD_PCT));
        assert!(!is_mispriced(12.5, 10.0, DEFAULT_THRESHOLD_PCT));
        assert!(!is_mispriced(8.0, 10.0, DEFAULT_THRESHOLD_PCT));
        assert!(is_mispriced(8.0, 10.0, 15.0));
    }

    #[test]
    fn test_mid_price() {
        assert_relative_eq!(mid_price(2.0, 2.2, 0.0), 2.1, epsilon = 1e-12);
        assert_eq!(mid_price(2.0, 0.0, 1.9), 1.9);
        assert_eq!(mid_price(-1.0, 2.0, 1.9), 1.9);
    }
}
