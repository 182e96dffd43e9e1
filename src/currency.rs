//! Currency codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::ValidationError;

/// ISO-4217 style three-letter currency code, stored uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Indonesian rupiah, the base currency of every projection
    pub const IDR: CurrencyCode = CurrencyCode(*b"IDR");

    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    pub fn is_base(&self) -> bool {
        *self == Self::IDR
    }

    /// Currencies conventionally shown without minor units
    pub fn is_zero_decimal(&self) -> bool {
        matches!(self.as_str(), "JPY" | "KRW" | "VND")
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::IDR
    }
}

impl FromStr for CurrencyCode {
    type Err = ValidationError;

    /// Accepts surrounding whitespace and any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();

        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(ValidationError::InvalidCurrency {
                value: s.to_string(),
            });
        }

        let mut code = [0u8; 3];
        for (slot, byte) in code.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(CurrencyCode(code))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let code: CurrencyCode = " usd ".parse().unwrap();
        assert_eq!(code.as_str(), "USD");
        assert!(!code.is_base());
        assert!("idr".parse::<CurrencyCode>().unwrap().is_base());
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        for bad in ["", "US", "USDT", "U$D", "12A", "ÄBC"] {
            assert!(bad.parse::<CurrencyCode>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&CurrencyCode::IDR).unwrap();
        assert_eq!(json, "\"IDR\"");

        let code: CurrencyCode = serde_json::from_str("\"eur\"").unwrap();
        assert_eq!(code.to_string(), "EUR");
        assert!(serde_json::from_str::<CurrencyCode>("\"euro\"").is_err());
    }
}
