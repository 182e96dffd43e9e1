//! Runtime configuration
//!
//! Defaults can be overridden through environment variables:
//!   RATE_API_BASE_URL, RATE_API_TIMEOUT_MS, LENIENT_PARSING,
//!   CONTACT_DELAY_MS, CONTACT_ATTACHMENT

use std::env;
use std::time::Duration;
use crate::error::ConfigError;

/// Default exchange-rate service
pub const DEFAULT_RATE_API_BASE_URL: &str = "https://api.exchangerate.host";

/// Default simulated round trip for the contact form
pub const DEFAULT_CONTACT_DELAY: Duration = Duration::from_millis(900);

/// Configuration shared by the simulator, the conversion client, and the contact form
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Base URL of the rate service; `/convert` is appended
    pub rate_api_base_url: String,

    /// Request timeout for the rate lookup. `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,

    /// Coerce non-numeric input to field defaults instead of rejecting it
    pub lenient_parsing: bool,

    /// Simulated delay before a contact submission is acknowledged
    pub contact_delay: Duration,

    /// Link attached to the contact acknowledgement
    pub contact_attachment: Option<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            rate_api_base_url: DEFAULT_RATE_API_BASE_URL.to_string(),
            request_timeout: None,
            lenient_parsing: false,
            contact_delay: DEFAULT_CONTACT_DELAY,
            contact_attachment: None,
        }
    }
}

impl SimulatorConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("RATE_API_BASE_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid("RATE_API_BASE_URL", &url, "expected an http(s) URL"));
            }
            config.rate_api_base_url = url;
        }

        if let Some(ms) = lookup("RATE_API_TIMEOUT_MS") {
            config.request_timeout = Some(Duration::from_millis(parse_millis("RATE_API_TIMEOUT_MS", &ms)?));
        }

        if let Some(flag) = lookup("LENIENT_PARSING") {
            config.lenient_parsing = parse_flag("LENIENT_PARSING", &flag)?;
        }

        if let Some(ms) = lookup("CONTACT_DELAY_MS") {
            config.contact_delay = Duration::from_millis(parse_millis("CONTACT_DELAY_MS", &ms)?);
        }

        if let Some(link) = lookup("CONTACT_ATTACHMENT") {
            let link = link.trim();
            config.contact_attachment = (!link.is_empty()).then(|| link.to_string());
        }

        Ok(config)
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(key, value, &e.to_string()))
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid(key, value, "expected true or false")),
    }
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
