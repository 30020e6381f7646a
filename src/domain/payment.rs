use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword table consulted in order; the first method with a matching
/// keyword wins.
const PAYMENT_KEYWORDS: [(PaymentMethod, &[&str]); 2] = [
    (PaymentMethod::Ngn, &["ngn", "naira"]),
    (PaymentMethod::Crypto, &["crypto", "usdt"]),
];

/// Labels of the payment affordance chips.
pub const PAYMENT_PRESETS: [&str; 2] = ["Pay with NGN", "Pay with Crypto"];

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Ngn,
    Crypto,
}

impl PaymentMethod {
    /// Matches free text or a chip label against the keyword table.
    ///
    /// Matching is a case-insensitive substring search, so text naming both
    /// methods resolves to NGN.
    pub fn from_selection(text: &str) -> Result<Self, ValidationError> {
        let lowered = text.trim().to_lowercase();
        PAYMENT_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(method, _)| *method)
            .ok_or(ValidationError::UnknownPaymentMethod)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Ngn => "ngn",
            PaymentMethod::Crypto => "crypto",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
