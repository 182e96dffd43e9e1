//! Input boundary: raw text fields to a validated projection input
//!
//! Parsing, defaulting, and validation all happen here so the engine only
//! ever sees values inside its domain.
//!
//! Field defaults when left empty:
//! - principal, contribution, rate: 0
//! - years: 1
//! - currency: IDR
//!
//! In lenient mode unparseable text also falls back to the field default,
//! and a years value of exactly zero becomes 1. Strict mode rejects both.
//! Lenient mode additionally reads `0x`, `0o` and `0b` integer literals.

use serde::{Deserialize, Serialize};
use crate::currency::CurrencyCode;
use crate::error::ValidationError;
use crate::projection::ProjectionInput;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub contribution: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub currency: String,
}

impl RawInput {
    pub fn new(
        principal: impl Into<String>,
        contribution: impl Into<String>,
        rate: impl Into<String>,
        years: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            contribution: contribution.into(),
            rate: rate.into(),
            years: years.into(),
            currency: currency.into(),
        }
    }
}

/// A projection input together with the currency the user wants to see
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedInput {
    pub projection: ProjectionInput,
    pub currency: CurrencyCode,
}

/// How to treat text that does not parse as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Reject with [`ValidationError::NotANumber`]
    #[default]
    Strict,
    /// Fall back to the field default
    Lenient,
}

impl ParseMode {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }
}

/// Parse, default, and validate all five fields
///
/// Fields are checked in form order and the first failure is returned.
pub fn parse_input(raw: &RawInput, mode: ParseMode) -> ValidationResult<ValidatedInput> {
    let principal = parse_amount("principal", &raw.principal, mode)?;
    let monthly_contribution = parse_amount("contribution", &raw.contribution, mode)?;
    let annual_rate_percent = parse_amount("rate", &raw.rate, mode)?;
    let years = parse_years(&raw.years, mode)?;
    let currency = parse_currency(&raw.currency)?;

    Ok(ValidatedInput {
        projection: ProjectionInput::new(principal, monthly_contribution, annual_rate_percent, years),
        currency,
    })
}

/// Parse a non-negative amount or rate, defaulting to 0
pub fn parse_amount(field: &'static str, text: &str, mode: ParseMode) -> ValidationResult<f64> {
    let value = parse_number(field, text, 0.0, mode)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    // Normalise -0 so it never shows up in results
    Ok(value + 0.0)
}

/// Parse a positive horizon in years, defaulting to 1
pub fn parse_years(text: &str, mode: ParseMode) -> ValidationResult<f64> {
    let value = parse_number("years", text, 1.0, mode)?;
    let value = if mode == ParseMode::Lenient && value == 0.0 { 1.0 } else { value };

    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field: "years", value });
    }
    Ok(value)
}

/// Parse a currency code, defaulting to IDR
pub fn parse_currency(text: &str) -> ValidationResult<CurrencyCode> {
    if text.trim().is_empty() {
        return Ok(CurrencyCode::IDR);
    }
    text.parse()
}

fn parse_number(field: &'static str, text: &str, default: f64, mode: ParseMode) -> ValidationResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    match (trimmed.parse::<f64>(), mode) {
        (Ok(value), _) if value.is_finite() => Ok(value),
        // NaN coerces like any other non-number in lenient mode
        (Ok(value), ParseMode::Lenient) if value.is_nan() => Ok(default),
        (Ok(_), _) => Err(ValidationError::NotFinite { field }),
        (Err(_), ParseMode::Lenient) => match parse_prefixed_integer(trimmed) {
            Some(value) if value.is_finite() => Ok(value),
            Some(_) => Err(ValidationError::NotFinite { field }),
            None => Ok(default),
        },
        (Err(_), ParseMode::Strict) => Err(ValidationError::NotANumber {
            field,
            value: text.to_string(),
        }),
    }
}

/// Unsigned hex, octal, or binary literal such as `0x1A`
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| c.to_digit(radix).map(|d| acc * radix as f64 + d as f64))
}
