use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use crate::config::SimulatorConfig;
use super::error::ConversionError;
use super::request::{ConversionOutcome, ConversionRequest};

/// A source of converted amounts.
///
/// Implementors only report how a lookup went; `convert` turns that into the
/// outcome callers see, so no failure ever escapes the adapter.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Look up the converted amount for a request.
    async fn fetch_conversion(&self, request: &ConversionRequest) -> Result<f64, ConversionError>;

    /// Single best-effort attempt. No retry, no caching.
    async fn convert(&self, request: &ConversionRequest) -> ConversionOutcome {
        log::debug!(
            "converting {} {} to {}",
            request.amount,
            request.source_currency,
            request.target_currency
        );

        match self.fetch_conversion(request).await {
            Ok(amount) => ConversionOutcome::Converted { amount },
            Err(e) => {
                log::warn!("exchange rate for {} unavailable: {}", request.target_currency, e);
                ConversionOutcome::Unavailable
            }
        }
    }
}

/// Body of a `GET /convert` response. Only `result` is used.
#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(default)]
    result: Option<Value>,
}

/// `RateProvider` backed by an exchangerate.host compatible `/convert` endpoint.
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeRateClient {
    pub fn new(config: &SimulatorConfig) -> Result<Self, ConversionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.rate_api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn fetch_conversion(&self, request: &ConversionRequest) -> Result<f64, ConversionError> {
        let url = format!("{}/convert", self.base_url);
        let amount = request.amount.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("from", request.source_currency.as_str()),
                ("to", request.target_currency.as_str()),
                ("amount", amount.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConversionError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: ConvertResponse =
            serde_json::from_str(&text).map_err(|e| ConversionError::Payload(e.to_string()))?;

        extract_result(body.result)
    }
}

/// A usable result is a finite, non-zero number. Zero is treated as missing.
fn extract_result(result: Option<Value>) -> Result<f64, ConversionError> {
    let value = result.ok_or_else(|| ConversionError::Payload("missing result field".to_string()))?;

    match value.as_f64() {
        Some(amount) if amount.is_finite() && amount != 0.0 => Ok(amount),
        Some(amount) => Err(ConversionError::Payload(format!("unusable result {}", amount))),
        None => Err(ConversionError::Payload(format!("result is not a number: {}", value))),
    }
}
