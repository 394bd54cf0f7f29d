use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::{Booking, BookingRequest};
use crate::services::acceptance::BookingAcceptance as _;
use crate::services::validation::{self, ValidationErrors};
use crate::state::AppState;

#[derive(Debug)]
pub enum SubmitError {
    Validation(ValidationErrors),
    Busy,
    Rejected(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(errors) => write!(f, "{errors}"),
            SubmitError::Busy => {
                write!(f, "A booking is already being submitted. Please wait.")
            }
            SubmitError::Rejected(_) => {
                write!(f, "We couldn't submit your booking. Please try again.")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// The booking form widget: validates a request, hands it to the booking
/// backend, and records the accepted booking in the store.
pub struct BookingForm {
    state: Arc<AppState>,
    submitting: AtomicBool,
}

impl BookingForm {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Submit a repair request. Validation failures reject immediately and
    /// never set the busy flag; a submission already in flight rejects with
    /// `Busy`. On acceptance the created booking is returned and becomes
    /// the store's current booking.
    pub async fn submit(&self, request: &BookingRequest) -> Result<Booking, SubmitError> {
        if self.submitting.load(Ordering::SeqCst) {
            return Err(SubmitError::Busy);
        }

        validation::validate_booking(request).map_err(SubmitError::Validation)?;

        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::Busy);
        }
        self.state.store.lock().unwrap().set_loading(true);

        let accepted = self.state.acceptance.accept(request).await;

        let outcome = match accepted {
            Ok(()) => {
                let mut store = self.state.store.lock().unwrap();
                store.set_loading(false);
                let booking = store.add_booking(request);
                tracing::info!(id = %booking.id, "booking submitted");
                Ok(booking)
            }
            Err(err) => {
                self.state.store.lock().unwrap().set_loading(false);
                tracing::warn!(error = %err, "booking acceptance failed");
                Err(SubmitError::Rejected(err.to_string()))
            }
        };

        self.submitting.store(false, Ordering::SeqCst);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::config::AppConfig;
    use crate::models::RepairStage;
    use crate::services::acceptance::{BookingAcceptance, SimulatedAcceptance};
    use crate::services::delivery::{DeliveryError, MessageDelivery, MessagePayload};
    use crate::store::BookingStore;

    struct NoopDelivery;

    #[async_trait]
    impl MessageDelivery for NoopDelivery {
        async fn send(&self, _payload: &MessagePayload) -> Result<(), DeliveryError> {
            Ok(())
        }
    }

    struct RejectingAcceptance;

    #[async_trait]
    impl BookingAcceptance for RejectingAcceptance {
        async fn accept(&self, _request: &BookingRequest) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("backend unavailable"))
        }
    }

    /// Blocks inside `accept` until a permit is released by the test.
    struct GatedAcceptance {
        gate: Arc<tokio::sync::Semaphore>,
    }

    #[async_trait]
    impl BookingAcceptance for GatedAcceptance {
        async fn accept(&self, _request: &BookingRequest) -> anyhow::Result<()> {
            let _permit = self.gate.acquire().await?;
            Ok(())
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            business_name: "TechFix Pro".to_string(),
            emailjs_public_key: "pk_test".to_string(),
            emailjs_service_id: "service_test".to_string(),
            emailjs_template_id: "template_test".to_string(),
            simulated_latency_ms: 0,
        }
    }

    fn test_state(acceptance: Box<dyn BookingAcceptance>) -> Arc<AppState> {
        Arc::new(AppState {
            store: Arc::new(Mutex::new(BookingStore::new())),
            config: test_config(),
            acceptance,
            delivery: Box::new(NoopDelivery),
        })
    }

    fn request() -> BookingRequest {
        BookingRequest {
            name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
            email: "jane@example.com".to_string(),
            service: "Laptop Repair".to_string(),
            date: "2024-12-01".to_string(),
            device: None,
            description: "Screen is cracked and black".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_creates_booking() {
        let state = test_state(Box::new(SimulatedAcceptance::new(Duration::ZERO)));
        let form = BookingForm::new(state.clone());

        let booking = form.submit(&request()).await.unwrap();

        assert_eq!(booking.status, RepairStage::Received);
        assert!(booking.id.starts_with("TRK-"));
        let store = state.store.lock().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.current_booking().unwrap().id, booking.id);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_store() {
        let state = test_state(Box::new(SimulatedAcceptance::new(Duration::ZERO)));
        let form = BookingForm::new(state.clone());

        let mut bad = request();
        bad.email = "not-an-email".to_string();
        let err = form.submit(&bad).await.unwrap_err();

        match err {
            SubmitError::Validation(errors) => {
                assert_eq!(errors.message_for("email"), Some("Invalid email address"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(state.store.lock().unwrap().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_rejected_acceptance_leaves_store_unchanged() {
        let state = test_state(Box::new(RejectingAcceptance));
        let form = BookingForm::new(state.clone());

        let err = form.submit(&request()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Rejected(_)));
        let store = state.store.lock().unwrap();
        assert!(store.is_empty());
        assert!(!store.is_loading());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_second_submission_rejected_while_in_flight() {
        let gate = Arc::new(tokio::sync::Semaphore::new(0));
        let state = test_state(Box::new(GatedAcceptance { gate: gate.clone() }));
        let form = Arc::new(BookingForm::new(state.clone()));

        let first = {
            let form = Arc::clone(&form);
            tokio::spawn(async move { form.submit(&request()).await })
        };

        // Wait until the first submission holds the busy flag.
        while !form.is_submitting() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let err = form.submit(&request()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Busy));
        assert!(state.store.lock().unwrap().is_empty());

        gate.add_permits(1);
        let booking = first.await.unwrap().unwrap();
        assert_eq!(state.store.lock().unwrap().len(), 1);
        assert_eq!(booking.status, RepairStage::Received);
    }
}
