//! Money value object for rupee amounts.
//!
//! Amounts are kept as plain f64 rupees; Display renders the Indian
//! grouping convention (last three digits, then groups of two), e.g.
//! 3000000 -> "₹30,00,000".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A rupee amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Zero rupees.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Money from a raw amount.
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Creates a Money, returning error unless the amount is strictly
    /// positive and finite.
    pub fn positive(field: &str, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::not_positive(field, amount));
        }
        Ok(Self(amount))
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Formats the rounded amount with Indian digit grouping, without
    /// the currency symbol.
    fn grouped(&self) -> String {
        let rounded = self.0.abs().round() as u64;
        let digits = rounded.to_string();
        if digits.len() <= 3 {
            return digits;
        }

        // Split off the last three digits, then group the rest in twos.
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let bytes = head.as_bytes();
        let mut end = bytes.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.round() < 0.0 {
            write!(f, "-₹{}", self.grouped())
        } else {
            write!(f, "₹{}", self.grouped())
        }
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self::new(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_positive_accepts_positive_amounts() {
        let m = Money::positive("income", 85000.0).unwrap();
        assert_eq!(m.amount(), 85000.0);
        assert!(m.is_positive());
    }

    #[test]
    fn money_positive_rejects_zero() {
        assert!(Money::positive("income", 0.0).is_err());
    }

    #[test]
    fn money_positive_rejects_negative() {
        assert!(Money::positive("income", -100.0).is_err());
    }

    #[test]
    fn money_positive_rejects_nan_and_infinity() {
        assert!(Money::positive("income", f64::NAN).is_err());
        assert!(Money::positive("income", f64::INFINITY).is_err());
    }

    #[test]
    fn money_formats_small_amounts_without_separators() {
        assert_eq!(Money::new(0.0).to_string(), "₹0");
        assert_eq!(Money::new(999.0).to_string(), "₹999");
    }

    #[test]
    fn money_formats_thousands_with_single_group() {
        assert_eq!(Money::new(30000.0).to_string(), "₹30,000");
        assert_eq!(Money::new(85000.0).to_string(), "₹85,000");
    }

    #[test]
    fn money_formats_lakhs_with_indian_grouping() {
        assert_eq!(Money::new(3000000.0).to_string(), "₹30,00,000");
        assert_eq!(Money::new(7500000.0).to_string(), "₹75,00,000");
    }

    #[test]
    fn money_formats_crores_with_indian_grouping() {
        assert_eq!(Money::new(12345678.0).to_string(), "₹1,23,45,678");
        assert_eq!(Money::new(100000000.0).to_string(), "₹10,00,00,000");
    }

    #[test]
    fn money_rounds_fractional_amounts() {
        assert_eq!(Money::new(28899.6).to_string(), "₹28,900");
    }

    #[test]
    fn money_formats_negative_amounts_with_sign() {
        assert_eq!(Money::new(-1500.0).to_string(), "-₹1,500");
    }

    #[test]
    fn money_serializes_transparently() {
        let json = serde_json::to_string(&Money::new(28900.0)).unwrap();
        assert_eq!(json, "28900.0");
    }

    #[test]
    fn money_ordering_works() {
        assert!(Money::new(100.0) < Money::new(200.0));
    }
}
