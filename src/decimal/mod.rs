//! Decimal type utilities for precise monetary calculations
//!
//! All conversions run on `rust_decimal::Decimal` so that scaling by powers
//! of ten stays exact; native floats exist only at the API boundary.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;
pub use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fractional digits in a display amount (1 display unit = 10^6 base units)
pub const DISPLAY_DECIMALS: u32 = 6;

/// Fractional digits in a fiat amount (cents-level precision)
pub const FIAT_DECIMALS: u32 = 2;

/// Rounding policy applied when reducing a value to a target number of
/// fractional digits. Selected per call; there is no global policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Drop all digits beyond the kept precision (truncate)
    #[default]
    ToZero,
    /// Increment the last kept digit if any dropped digit is non-zero
    AwayFromZero,
    /// Round to nearest; ties round away from zero
    HalfUp,
    /// Round to nearest; ties round to the even neighbour (banker's rounding)
    HalfEven,
}

impl RoundingMode {
    /// The rust_decimal strategy with the same tie-break semantics
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::ToZero => RoundingStrategy::ToZero,
            RoundingMode::AwayFromZero => RoundingStrategy::AwayFromZero,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Exact power-of-ten scale factor
pub fn pow10(exp: u32) -> Decimal {
    Decimal::from(10u64.pow(exp))
}

/// Round `value` to `dp` fractional digits under the given mode
pub fn round_dp(value: Decimal, dp: u32, mode: RoundingMode) -> Decimal {
    value.round_dp_with_strategy(dp, mode.strategy())
}

/// Construct a Decimal from an f64 at the API boundary.
///
/// NaN and infinities are rejected here so they never reach the arithmetic
/// core, which would otherwise surface an unrelated construction error.
pub fn try_decimal(value: f64, what: &str) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::InvalidAmount(format!(
            "{} must be finite, got {}",
            what, value
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| Error::Decimal(format!("{} {} is not representable", what, value)))
}

/// Extract an unsigned integer result, rejecting negative or out-of-range values
pub fn try_u64(value: Decimal, what: &str) -> Result<u64> {
    value
        .to_u64()
        .ok_or_else(|| Error::Decimal(format!("{} {} does not fit an unsigned integer", what, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_to_zero() {
        assert_eq!(RoundingMode::default(), RoundingMode::ToZero);
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), dec!(1));
        assert_eq!(pow10(2), dec!(100));
        assert_eq!(pow10(6), dec!(1_000_000));
    }

    #[test]
    fn test_round_to_zero_truncates() {
        assert_eq!(round_dp(dec!(1.9999999), 6, RoundingMode::ToZero), dec!(1.999999));
        assert_eq!(round_dp(dec!(-1.9999999), 6, RoundingMode::ToZero), dec!(-1.999999));
    }

    #[test]
    fn test_round_away_from_zero_on_any_remainder() {
        assert_eq!(round_dp(dec!(1.0000001), 6, RoundingMode::AwayFromZero), dec!(1.000001));
        assert_eq!(round_dp(dec!(1.000001), 6, RoundingMode::AwayFromZero), dec!(1.000001));
    }

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_dp(dec!(0.125), 2, RoundingMode::HalfUp), dec!(0.13));
        assert_eq!(round_dp(dec!(0.1249), 2, RoundingMode::HalfUp), dec!(0.12));
    }

    #[test]
    fn test_round_half_even_ties() {
        // exact ties go to the even neighbour
        assert_eq!(round_dp(dec!(0.125), 2, RoundingMode::HalfEven), dec!(0.12));
        assert_eq!(round_dp(dec!(0.135), 2, RoundingMode::HalfEven), dec!(0.14));
        // a non-zero digit past the tie breaks toward nearest
        assert_eq!(round_dp(dec!(0.1251), 2, RoundingMode::HalfEven), dec!(0.13));
    }

    #[test]
    fn test_try_decimal_rejects_non_finite() {
        assert!(try_decimal(f64::NAN, "amount").is_err());
        assert!(try_decimal(f64::INFINITY, "amount").is_err());
        assert!(try_decimal(f64::NEG_INFINITY, "amount").is_err());
        assert_eq!(try_decimal(420.69, "amount").unwrap(), dec!(420.69));
    }

    #[test]
    fn test_try_u64_rejects_negative() {
        assert!(try_u64(dec!(-1), "amount").is_err());
        assert_eq!(try_u64(dec!(420690000), "amount").unwrap(), 420690000);
    }
}
