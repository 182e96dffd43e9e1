//! Best-effort currency conversion of projected totals

mod client;
mod error;
mod request;

pub use client::{ExchangeRateClient, RateProvider};
pub use error::ConversionError;
pub use request::{ConversionOutcome, ConversionRequest};
