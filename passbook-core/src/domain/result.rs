//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;

/// Core library error type
///
/// The domain has exactly two failure kinds: an amount that fails
/// validation, and a withdrawal larger than the current balance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Non-positive deposit/withdrawal amount, negative initial balance,
    /// or textual input that did not parse as a number
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Withdrawal exceeding the current balance
    #[error("cannot withdraw ${attempted:.2}: current balance is ${balance:.2}")]
    InsufficientFunds { attempted: Decimal, balance: Decimal },
}

impl Error {
    /// Create an invalid amount error
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
