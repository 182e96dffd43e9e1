use thiserror::Error;

/// Why a rate lookup failed
///
/// Only used for logging: [`super::RateProvider::convert`] collapses every
/// variant into [`super::ConversionOutcome::Unavailable`].
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("rate service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rate service returned HTTP {0}")]
    Status(u16),

    #[error("rate service response was unusable: {0}")]
    Payload(String),
}
