//! Error types for unit conversion and balance validation
//!
//! Every fallible operation in this crate fails before any arithmetic runs:
//! inputs are validated at the API boundary and rejected with one of the
//! variants below. There is no partial-failure state to clean up.

use thiserror::Error;

/// Unit conversion error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error for an amount that is non-finite, negative where the target
    /// denomination is unsigned, or textually malformed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Error for an exchange rate that is zero, negative, or non-finite
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    /// Decimal conversion error at the primitive boundary
    #[error("Decimal conversion error: {0}")]
    Decimal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// From rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Decimal(err.to_string())
    }
}
