//! Monetary unit conversion and balance validation for wallet frontends
//!
//! This library converts a crypto asset's amounts between its three
//! denominations — integer base units (10^6 base units = 1 display unit),
//! decimal display units, and fiat via a caller-supplied exchange rate —
//! with explicit per-call rounding control. All intermediate arithmetic runs
//! on `rust_decimal::Decimal`; binary floating point appears only at the API
//! boundary. Every function is pure and synchronous.

pub mod account;
pub mod convert;
pub mod decimal;
pub mod error;

/// Re-export important types
pub use account::{AccountBalance, FLAT_TXN_FEE};
pub use convert::{
    base_to_display, base_to_fiat, cents_to_base, cents_to_fiat, display_to_base, fiat_to_base,
    fiat_to_cents, parse_display_amount,
};
pub use decimal::{RoundingMode, DISPLAY_DECIMALS, FIAT_DECIMALS};
pub use error::{Error, Result};
