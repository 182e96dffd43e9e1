//! Conversion request and outcome types

use serde::{Deserialize, Serialize};
use crate::currency::CurrencyCode;

/// A single conversion of a projected total out of the base currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    /// Always IDR
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
}

impl ConversionRequest {
    /// Convert an IDR amount into `target_currency`
    pub fn from_idr(amount: f64, target_currency: CurrencyCode) -> Self {
        Self {
            amount,
            source_currency: CurrencyCode::IDR,
            target_currency,
        }
    }
}

/// Result of a best-effort conversion
///
/// Every failure mode (network, HTTP status, payload) maps to `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Converted { amount: f64 },
    Unavailable,
}

impl ConversionOutcome {
    /// Converted amount, if the lookup succeeded
    pub fn amount(&self) -> Option<f64> {
        match self {
            ConversionOutcome::Converted { amount } => Some(*amount),
            ConversionOutcome::Unavailable => None,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }
}
