//! Error types for input validation, schedules, configuration, and the contact form
//!
//! Conversion failures have their own type in [`crate::conversion`] because
//! they never reach the caller.

use thiserror::Error;

/// Input rejected at the boundary before any projection runs
///
/// Every variant is meant to be shown to the user as a blocking message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("currency must be a three-letter code, got {value:?}")]
    InvalidCurrency { value: String },
}

/// Schedule requests that cannot be tabulated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("a {years} year horizon exceeds the schedule limit of {max_months} months")]
    HorizonTooLong { years: f64, max_months: u32 },
}

/// Contact form submission failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    /// Fields that were empty after trimming, in form order
    #[error("please fill in all fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Invalid configuration override
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::NonPositive { field: "years", value: 0.0 };
        assert_eq!(err.to_string(), "years must be greater than zero, got 0");

        let err = ContactError::MissingFields(vec!["name", "message"]);
        assert_eq!(err.to_string(), "please fill in all fields (missing: name, message)");
    }
}
