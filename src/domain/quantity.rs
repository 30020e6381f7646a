use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Preset quantities offered alongside the quantity affordance.
pub const QUANTITY_PRESETS: [u32; 4] = [500, 1000, 1500, 2000];

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// Number of units in an order.
///
/// Always within `Quantity::MIN..=Quantity::MAX`; construction goes through
/// `Quantity::new` or `Quantity::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: u32 = 100;
    pub const MAX: u32 = 10_000;

    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value < u64::from(Self::MIN) {
            Err(ValidationError::QuantityTooLow(value))
        } else if value > u64::from(Self::MAX) {
            Err(ValidationError::QuantityTooHigh(value))
        } else {
            // MAX fits in u32
            Ok(Self(value as u32))
        }
    }

    /// Extracts the first run of digits anywhere in `text` and validates it.
    ///
    /// A run too long to fit in a `u64` is reported as too high.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let digits = DIGIT_RUN
            .find(text)
            .ok_or(ValidationError::MissingQuantity)?;
        let value = digits.as_str().parse::<u64>().unwrap_or(u64::MAX);
        Self::new(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_bounds() {
        assert!(Quantity::new(100).is_ok());
        assert!(Quantity::new(10_000).is_ok());
        assert_eq!(Quantity::new(99), Err(ValidationError::QuantityTooLow(99)));
        assert_eq!(
            Quantity::new(10_001),
            Err(ValidationError::QuantityTooHigh(10_001))
        );
    }

    #[test]
    fn test_parse_embedded_digits() {
        let q = Quantity::parse("I want 1500 followers please").unwrap();
        assert_eq!(q.value(), 1500);
    }

    #[test]
    fn test_parse_takes_first_run_only() {
        // "50" is the first run, the later "500" is never considered
        assert_eq!(
            Quantity::parse("50 or 500"),
            Err(ValidationError::QuantityTooLow(50))
        );
    }

    #[test]
    fn test_parse_without_digits() {
        assert_eq!(
            Quantity::parse("a thousand"),
            Err(ValidationError::MissingQuantity)
        );
    }

    #[test]
    fn test_parse_overflowing_run_is_too_high() {
        assert_eq!(
            Quantity::parse("999999999999999999999999"),
            Err(ValidationError::QuantityTooHigh(u64::MAX))
        );
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in QUANTITY_PRESETS {
            assert!(Quantity::new(u64::from(preset)).is_ok());
        }
    }
}
