//! Option kind and terminal payoff.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Type of European vanilla option.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
///
/// let put: OptionType = "PUT".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy: max(S - K, 0)
    Call,
    /// Right to sell: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both kinds, calls first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Payoff direction: +1 for call, -1 for put.
    #[inline]
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Terminal payoff `max(φ(S - K), 0)`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Strictly in the money at the given spot.
    #[inline]
    pub fn is_itm(&self, spot: f64, strike: f64) -> bool {
        match self {
            OptionType::Call => spot > strike,
            OptionType::Put => spot < strike,
        }
    }

    /// Lowercase name, as used by the presentation and persistence layers.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.intrinsic(80.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.intrinsic(120.0, 100.0), 0.0);
        // At the money both are worthless
        assert_eq!(OptionType::Call.intrinsic(100.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_is_itm() {
        assert!(OptionType::Call.is_itm(101.0, 100.0));
        assert!(!OptionType::Call.is_itm(100.0, 100.0));
        assert!(OptionType::Put.is_itm(99.0, 100.0));
        assert!(!OptionType::Put.is_itm(100.0, 100.0));
    }

    #[test]
    fn test_parse() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" Call ".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!(matches!(
            "forward".parse::<OptionType>(),
            Err(InstrumentError::UnknownOptionType(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in OptionType::ALL {
            assert_eq!(kind.to_string().parse::<OptionType>().unwrap(), kind);
        }
    }
}
