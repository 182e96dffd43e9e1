//! Mock contact form submission
//!
//! Nothing is delivered anywhere: a submission is validated, held for the
//! configured delay to mimic a round trip, and acknowledged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::SimulatorConfig;
use crate::error::ContactError;

/// Acknowledgement text shown after a successful submission
pub const THANK_YOU_MESSAGE: &str = "Thank you! Your message has been received.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    /// Sender name, trimmed
    pub name: String,
    pub message: String,
    /// Optional link shown next to the acknowledgement
    pub attachment: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check that every field has content after trimming
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }
}

/// Validate and acknowledge a contact form after the configured delay
pub async fn submit(form: &ContactForm, config: &SimulatorConfig) -> Result<ContactReceipt, ContactError> {
    form.validate()?;

    log::debug!("holding contact submission for {:?}", config.contact_delay);
    tokio::time::sleep(config.contact_delay).await;

    let name = form.name.trim().to_string();
    log::info!("contact message received from {} <{}>", name, form.email.trim());

    Ok(ContactReceipt {
        name,
        message: THANK_YOU_MESSAGE.to_string(),
        attachment: config.contact_attachment.clone(),
        received_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_validate_reports_missing_fields_in_order() {
        let form = ContactForm::new("  ", "a@example.com", "");
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingFields(vec!["name", "message"]))
        );
        assert!(ContactForm::new("Ana", "ana@example.com", "Hi").validate().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let config = SimulatorConfig {
            contact_attachment: Some("/files/brochure.pdf".to_string()),
            ..Default::default()
        };
        let form = ContactForm::new(" Ana ", "ana@example.com", "Hello");

        let started = tokio::time::Instant::now();
        let receipt = submit(&form, &config).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(900));
        assert_eq!(receipt.name, "Ana");
        assert_eq!(receipt.message, THANK_YOU_MESSAGE);
        assert_eq!(receipt.attachment.as_deref(), Some("/files/brochure.pdf"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_rejects_before_waiting() {
        let started = tokio::time::Instant::now();
        let result = submit(&ContactForm::default(), &SimulatorConfig::default()).await;

        assert_eq!(
            result,
            Err(ContactError::MissingFields(vec!["name", "email", "message"]))
        );
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
