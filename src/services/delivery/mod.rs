pub mod emailjs;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::ContactRequest;

/// What the email template receives. Field names match the template
/// variables configured on the delivery service.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

impl MessagePayload {
    pub fn from_contact(request: &ContactRequest, to_name: &str) -> Self {
        Self {
            from_name: format!("{} {}", request.first_name, request.last_name),
            from_email: request.email.clone(),
            phone: request
                .phone
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| "Not provided".to_string()),
            subject: request.subject.clone(),
            message: request.message.clone(),
            to_name: to_name.to_string(),
        }
    }
}

/// Delivery failures, one variant per user-visible category. The `Display`
/// text is exactly what the contact widget shows.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliveryError {
    #[error("Messaging is not set up yet. Please call or email us directly.")]
    NotConfigured,

    #[error("We couldn't authenticate with our email service. Please call us while we sort this out.")]
    Auth,

    #[error("Our email service rejected the message. Please check your details and try again.")]
    Rejected,

    #[error("Oops! Something went wrong. Please try again later.")]
    Failed(String),
}

#[async_trait]
pub trait MessageDelivery: Send + Sync {
    async fn send(&self, payload: &MessagePayload) -> Result<(), DeliveryError>;
}
