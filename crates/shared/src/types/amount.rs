//! Validated monetary amount for bills and receivables.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision and
//! enforces the record invariants at construction: amounts are never
//! negative and carry at most three fractional digits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-negative monetary amount with at most three decimal places.
///
/// Trailing zeros do not count against the scale limit, so `12.500`
/// and `12.5` are both valid and equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// Errors raised when constructing an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The value is below zero.
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),

    /// The value carries more fractional digits than amounts allow.
    #[error("Amount supports at most {max} decimal places: {value}")]
    TooManyDecimals {
        /// The rejected value.
        value: Decimal,
        /// The maximum supported scale.
        max: u32,
    },
}

impl Amount {
    /// Maximum number of fractional digits an amount may carry.
    pub const MAX_SCALE: u32 = 3;

    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a validated amount.
    ///
    /// # Errors
    ///
    /// Returns `AmountError::Negative` for values below zero and
    /// `AmountError::TooManyDecimals` for values with more than three
    /// significant fractional digits.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }
        if value.normalize().scale() > Self::MAX_SCALE {
            return Err(AmountError::TooManyDecimals {
                value,
                max: Self::MAX_SCALE,
            });
        }
        Ok(Self(value))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
