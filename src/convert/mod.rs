//! Unit conversions between base, display, and fiat denominations
//!
//! A display unit is 10^6 base units; fiat relates to display units through a
//! caller-supplied exchange rate. Composed conversions round their
//! intermediate amount first and re-scale second — the caller's rounding mode
//! applies to that first stage, and the inner scaling step runs with the
//! default mode. The two stages are the contract; do not collapse them into
//! a single algebraic step, as that changes output on boundary values.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::*;
use tracing::debug;

use crate::decimal::{pow10, round_dp, try_decimal, try_u64, RoundingMode, DISPLAY_DECIMALS, FIAT_DECIMALS};
use crate::error::{Error, Result};

lazy_static! {
    /// Unsigned integer part with an optional fraction of at most 6 digits
    static ref DISPLAY_AMOUNT: Regex = Regex::new(r"^\d+(?:\.\d{0,6})?$").unwrap();
}

/// Converts base units to a display amount:
/// ```text
/// base / 10^6
/// ```
/// rounded to 6 fractional digits. Infallible: an unsigned integer scaled
/// down by 10^6 is always exactly representable.
pub fn base_to_display(base: u64, mode: RoundingMode) -> f64 {
    let display = round_dp(Decimal::from(base) / pow10(DISPLAY_DECIMALS), DISPLAY_DECIMALS, mode);
    // every Decimal has an f64 image
    display.to_f64().unwrap_or(0.0)
}

/// Converts a display amount to base units:
/// ```text
/// display * 10^6
/// ```
/// rounded to an integer. Rejects non-finite or negative input.
pub fn display_to_base(display: f64, mode: RoundingMode) -> Result<u64> {
    let display = non_negative(try_decimal(display, "display amount")?, "display amount")?;
    display_to_base_dec(display, mode)
}

/// Converts a fiat amount to base units:
/// ```text
/// (fiat / rate) * 10^6
/// ```
/// The intermediate display amount is rounded to 6 fractional digits under
/// `mode` before scaling; the scaling step rounds with the default mode.
pub fn fiat_to_base(fiat: f64, rate: f64, mode: RoundingMode) -> Result<u64> {
    let rate = validate_rate(rate)?;
    let fiat = non_negative(try_decimal(fiat, "fiat amount")?, "fiat amount")?;
    fiat_to_base_dec(fiat, rate, mode)
}

/// Converts base units to a fiat amount:
/// ```text
/// (base / 10^6) * rate
/// ```
/// rounded to 2 fractional digits under `mode`.
pub fn base_to_fiat(base: u64, rate: f64, mode: RoundingMode) -> Result<f64> {
    let rate = validate_rate(rate)?;
    let display = round_dp(Decimal::from(base) / pow10(DISPLAY_DECIMALS), DISPLAY_DECIMALS, RoundingMode::default());
    let fiat = round_dp(display * rate, FIAT_DECIMALS, mode);
    Ok(fiat.to_f64().unwrap_or(0.0))
}

/// Converts a fiat amount to cents:
/// ```text
/// fiat * 100
/// ```
/// rounded to an integer. Rejects non-finite or negative input.
pub fn fiat_to_cents(fiat: f64, mode: RoundingMode) -> Result<u64> {
    let fiat = non_negative(try_decimal(fiat, "fiat amount")?, "fiat amount")?;
    let cents = round_dp(fiat * pow10(FIAT_DECIMALS), 0, mode);
    try_u64(cents, "cent amount")
}

/// Converts cents to a fiat amount:
/// ```text
/// cents / 100
/// ```
/// rounded to 2 fractional digits. Infallible.
pub fn cents_to_fiat(cents: u64, mode: RoundingMode) -> f64 {
    let fiat = round_dp(Decimal::from(cents) / pow10(FIAT_DECIMALS), FIAT_DECIMALS, mode);
    fiat.to_f64().unwrap_or(0.0)
}

/// Converts cents to base units:
/// ```text
/// ((cents / 100) / rate) * 10^6
/// ```
/// The fiat amount is rounded to 2 fractional digits under `mode` first;
/// the fiat-to-base stage then runs with the default mode.
pub fn cents_to_base(cents: u64, rate: f64, mode: RoundingMode) -> Result<u64> {
    let rate = validate_rate(rate)?;
    let fiat = round_dp(Decimal::from(cents) / pow10(FIAT_DECIMALS), FIAT_DECIMALS, mode);
    fiat_to_base_dec(fiat, rate, RoundingMode::default())
}

/// Parses a user-entered display amount: an unsigned integer part with an
/// optional fraction of at most 6 digits. Anything else — empty input,
/// signs, exponents, group separators — is rejected.
pub fn parse_display_amount(input: &str) -> Result<f64> {
    if !DISPLAY_AMOUNT.is_match(input) {
        debug!("rejected display amount input {:?}", input);
        return Err(Error::InvalidAmount(format!(
            "malformed display amount: {:?}",
            input
        )));
    }
    input
        .parse::<f64>()
        .map_err(|e| Error::InvalidAmount(format!("{}: {}", input, e)))
}

fn display_to_base_dec(display: Decimal, mode: RoundingMode) -> Result<u64> {
    let base = round_dp(display * pow10(DISPLAY_DECIMALS), 0, mode);
    try_u64(base, "base amount")
}

fn fiat_to_base_dec(fiat: Decimal, rate: Decimal, mode: RoundingMode) -> Result<u64> {
    let display = round_dp(fiat / rate, DISPLAY_DECIMALS, mode);
    display_to_base_dec(display, RoundingMode::default())
}

fn validate_rate(rate: f64) -> Result<Decimal> {
    if !rate.is_finite() || rate <= 0.0 {
        debug!("rejected exchange rate {}", rate);
        return Err(Error::InvalidRate(format!(
            "exchange rate must be positive and finite, got {}",
            rate
        )));
    }
    Decimal::from_f64(rate)
        .ok_or_else(|| Error::Decimal(format!("exchange rate {} is not representable", rate)))
}

fn non_negative(value: Decimal, what: &str) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        debug!("rejected negative {} {}", what, value);
        return Err(Error::InvalidAmount(format!(
            "{} must be non-negative, got {}",
            what, value
        )));
    }
    Ok(value)
}
