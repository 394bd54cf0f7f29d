use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::ContactRequest;
use crate::services::delivery::{DeliveryError, MessageDelivery as _, MessagePayload};
use crate::services::validation::{self, ValidationErrors};
use crate::state::AppState;

#[derive(Debug)]
pub enum ContactError {
    Validation(ValidationErrors),
    Busy,
    Delivery(DeliveryError),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Validation(errors) => write!(f, "{errors}"),
            ContactError::Busy => write!(f, "Your message is already being sent. Please wait."),
            ContactError::Delivery(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Outcome banner shown under the form after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitStatus {
    pub success: bool,
    pub message: String,
}

const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// The contact form widget. Owns its field state so a failed delivery keeps
/// everything the customer typed, while a successful one clears it.
pub struct ContactForm {
    state: Arc<AppState>,
    fields: Mutex<ContactRequest>,
    sending: AtomicBool,
    last_status: Mutex<Option<SubmitStatus>>,
}

impl ContactForm {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            fields: Mutex::new(ContactRequest::default()),
            sending: AtomicBool::new(false),
            last_status: Mutex::new(None),
        }
    }

    pub fn fields(&self) -> ContactRequest {
        self.fields.lock().unwrap().clone()
    }

    pub fn set_fields(&self, fields: ContactRequest) {
        *self.fields.lock().unwrap() = fields;
    }

    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::SeqCst)
    }

    pub fn last_status(&self) -> Option<SubmitStatus> {
        self.last_status.lock().unwrap().clone()
    }

    /// Submit the current fields. Exactly one submission runs at a time;
    /// validation failures reject before the busy flag is touched. When the
    /// delivery service is not configured, no call is attempted and the
    /// not-configured message is surfaced instead.
    pub async fn submit(&self) -> Result<(), ContactError> {
        if self.sending.load(Ordering::SeqCst) {
            return Err(ContactError::Busy);
        }

        let request = self.fields();
        validation::validate_contact(&request).map_err(ContactError::Validation)?;

        if self.sending.swap(true, Ordering::SeqCst) {
            return Err(ContactError::Busy);
        }

        let result = self.deliver(&request).await;

        match &result {
            Ok(()) => {
                tracing::info!(subject = %request.subject, "contact message delivered");
                *self.fields.lock().unwrap() = ContactRequest::default();
                *self.last_status.lock().unwrap() = Some(SubmitStatus {
                    success: true,
                    message: SUCCESS_MESSAGE.to_string(),
                });
            }
            Err(err) => {
                // Fields stay as typed so the customer can retry.
                tracing::warn!(error = %err, "contact message failed");
                *self.last_status.lock().unwrap() = Some(SubmitStatus {
                    success: false,
                    message: err.to_string(),
                });
            }
        }

        self.sending.store(false, Ordering::SeqCst);
        result
    }

    async fn deliver(&self, request: &ContactRequest) -> Result<(), ContactError> {
        if !self.state.config.email_configured() {
            return Err(ContactError::Delivery(DeliveryError::NotConfigured));
        }

        let payload = MessagePayload::from_contact(request, &self.state.config.business_name);
        self.state
            .delivery
            .send(&payload)
            .await
            .map_err(ContactError::Delivery)
    }
}
