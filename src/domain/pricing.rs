use super::payment::PaymentMethod;
use super::quantity::Quantity;
use crate::error::{OrderFlowError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units priced when no quantity has been chosen yet.
const FALLBACK_QUANTITY: u32 = 500;

/// Fraction digits kept when rendering naira amounts.
const NGN_MAX_FRACTION_DIGITS: u32 = 3;

/// Rates used to turn a quantity into a displayed total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Naira charged per unit.
    pub unit_rate: Decimal,
    /// Naira per USDT.
    pub crypto_divisor: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            unit_rate: dec!(4.5),
            crypto_divisor: dec!(1500),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.unit_rate <= Decimal::ZERO {
            return Err(OrderFlowError::InvalidConfig(
                "unit_rate must be positive".to_string(),
            ));
        }
        if self.crypto_divisor <= Decimal::ZERO {
            return Err(OrderFlowError::InvalidConfig(
                "crypto_divisor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ngn,
    Usdt,
}

/// A computed total in the currency the customer pays with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Price {
    pub value: Decimal,
    pub currency: Currency,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency {
            Currency::Ngn => write!(f, "₦{}", group_thousands(self.value)),
            Currency::Usdt => write!(f, "${:.2} USDT", self.value),
        }
    }
}

/// Stateless calculator; every call recomputes from its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingCalculator {
    config: PricingConfig,
}

impl PricingCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn quote(&self, quantity: Option<Quantity>, payment: Option<PaymentMethod>) -> Price {
        let units = quantity.map_or(FALLBACK_QUANTITY, |q| q.value());
        let base = Decimal::from(units) * self.config.unit_rate;

        match payment {
            Some(PaymentMethod::Crypto) => Price {
                value: (base / self.config.crypto_divisor)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                currency: Currency::Usdt,
            },
            Some(PaymentMethod::Ngn) | None => Price {
                value: base,
                currency: Currency::Ngn,
            },
        }
    }
}

/// Renders `value` the way an en-US locale does: comma-grouped integer part
/// and at most three fraction digits without trailing zeros.
fn group_thousands(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(NGN_MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
