use async_trait::async_trait;
use shared::Lead;
use thiserror::Error;

use crate::config::NotifierConfig;

const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("email API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("email API returned {0}")]
    Status(reqwest::StatusCode),
}

/// Optional collaborator called after a lead is persisted. Failures are
/// logged by the handler and never fail the request: the persisted lead is
/// the primary contract.
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn send(&self, lead: &Lead) -> Result<(), NotifyError>;
}

/// Sends a staff notification through a transactional-email HTTP API.
pub struct EmailNotifier {
    http: reqwest::Client,
    config: NotifierConfig,
}

impl EmailNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn api_url(&self) -> &str {
        self.config.api_url.as_deref().unwrap_or(DEFAULT_EMAIL_API_URL)
    }
}

#[async_trait]
impl LeadNotifier for EmailNotifier {
    async fn send(&self, lead: &Lead) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({
                "from": self.config.from_email,
                "to": self.config.to_email,
                "subject": notification_subject(lead),
                "html": notification_body(lead),
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status()));
        }

        tracing::info!(lead_id = %lead.id, "staff notification sent");
        Ok(())
    }
}

fn notification_subject(lead: &Lead) -> String {
    format!("New Lead: {} - {}", lead.service, lead.name)
}

fn notification_body(lead: &Lead) -> String {
    format!(
        "<h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\
         <p><strong>Phone:</strong> <a href=\"tel:{phone}\">{phone}</a></p>\
         <p><strong>Service:</strong> {service}</p>\
         <p><strong>Message:</strong></p><p>{message}</p>\
         <p>Lead ID: {id} · Submitted: {submitted}</p>\
         <p><strong>Action required:</strong> follow up within 24 hours.</p>",
        name = lead.name,
        email = lead.email,
        phone = lead.phone,
        service = lead.service,
        message = lead.message,
        id = lead.id,
        submitted = lead.submitted_at.to_rfc3339(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::{LeadSource, NewLead};

    fn lead() -> Lead {
        Lead::from_new(
            "lead-42".into(),
            NewLead {
                name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                phone: "9876543210".into(),
                service: "Laptop Purchase".into(),
                message: "Need a laptop for college use, budget 40k".into(),
                source: LeadSource::Website,
                submitted_at: Utc::now(),
                ip_address: None,
                user_agent: None,
            },
        )
    }

    #[test]
    fn test_subject_names_service_and_customer() {
        assert_eq!(
            notification_subject(&lead()),
            "New Lead: Laptop Purchase - Jane Doe"
        );
    }

    #[test]
    fn test_body_carries_contact_details_and_id() {
        let body = notification_body(&lead());
        assert!(body.contains("mailto:jane@x.com"));
        assert!(body.contains("tel:9876543210"));
        assert!(body.contains("lead-42"));
    }
}
