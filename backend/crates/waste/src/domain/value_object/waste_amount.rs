//! Waste Amount Value Object
//!
//! A single logged waste quantity. Records are append-only, so amounts are
//! never negative; totals are computed by summing records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned for a negative waste amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeAmountError(pub i32);

impl fmt::Display for NegativeAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Waste amount cannot be negative (got {})", self.0)
    }
}

impl std::error::Error for NegativeAmountError {}

/// Non-negative waste quantity for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct WasteAmount(i32);

impl WasteAmount {
    /// Create a validated amount
    pub fn new(value: i32) -> Result<Self, NegativeAmountError> {
        if value < 0 {
            return Err(NegativeAmountError(value));
        }
        Ok(Self(value))
    }

    /// The zero amount used to seed a new resident's first record
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for WasteAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for WasteAmount {
    type Error = NegativeAmountError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WasteAmount> for i32 {
    fn from(amount: WasteAmount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_amounts() {
        assert_eq!(WasteAmount::new(0).unwrap().as_i32(), 0);
        assert_eq!(WasteAmount::new(42).unwrap().as_i32(), 42);
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(WasteAmount::new(-1), Err(NegativeAmountError(-1)));
    }

    #[test]
    fn test_zero() {
        assert_eq!(WasteAmount::zero().as_i32(), 0);
    }

    #[test]
    fn test_serde() {
        let amount = WasteAmount::new(5).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "5");

        let parsed: WasteAmount = serde_json::from_str("8").unwrap();
        assert_eq!(parsed.as_i32(), 8);

        let bad: Result<WasteAmount, _> = serde_json::from_str("-3");
        assert!(bad.is_err());
    }
}
