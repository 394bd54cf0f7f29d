use async_trait::async_trait;
use reqwest::StatusCode;

use super::{DeliveryError, MessageDelivery, MessagePayload};

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Sends contact messages through the EmailJS REST API.
pub struct EmailJsDelivery {
    public_key: String,
    service_id: String,
    template_id: String,
    client: reqwest::Client,
}

impl EmailJsDelivery {
    pub fn new(public_key: String, service_id: String, template_id: String) -> Self {
        Self {
            public_key,
            service_id,
            template_id,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MessageDelivery for EmailJsDelivery {
    async fn send(&self, payload: &MessagePayload) -> Result<(), DeliveryError> {
        let body = serde_json::json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": payload,
        });

        let response = self
            .client
            .post(SEND_URL)
            .json(&body)
            .send()
            .await
            .map_err(|err| DeliveryError::Failed(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(DeliveryError::Auth)
        } else if status == StatusCode::BAD_REQUEST {
            Err(DeliveryError::Rejected)
        } else {
            Err(DeliveryError::Failed(format!(
                "email service returned {status}"
            )))
        }
    }
}
