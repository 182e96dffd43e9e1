//! Growth Simulator - compound-interest savings projections
//!
//! This library provides:
//! - Future-value projection of a lump sum plus monthly contributions
//! - Month-by-month balance schedules with CSV export
//! - Best-effort conversion of the projected total into another currency
//! - Input parsing and validation at the user boundary
//! - IDR and international currency formatting
//! - A mock contact form submission

pub mod config;
pub mod contact;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod format;
pub mod input;
pub mod projection;
pub mod simulator;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use conversion::{ConversionOutcome, ConversionRequest, ExchangeRateClient, RateProvider};
pub use currency::CurrencyCode;
pub use error::{ConfigError, ContactError, ScheduleError, ValidationError};
pub use input::{parse_input, ParseMode, RawInput, ValidatedInput};
pub use projection::{project, ProjectionEngine, ProjectionInput, ProjectionResult};
pub use simulator::{SimulationReport, Simulator};
