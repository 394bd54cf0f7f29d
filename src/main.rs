use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use techfix::config::AppConfig;
use techfix::models::BookingRequest;
use techfix::services::acceptance::SimulatedAcceptance;
use techfix::services::booking::BookingForm;
use techfix::services::delivery::emailjs::EmailJsDelivery;
use techfix::services::lookup::StoreStatusLookup;
use techfix::services::status::{StatusTracker, TrackerState};
use techfix::state::AppState;
use techfix::store::BookingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let latency = Duration::from_millis(config.simulated_latency_ms);

    let store = Arc::new(Mutex::new(BookingStore::new()));
    let state = Arc::new(AppState {
        store: Arc::clone(&store),
        config: config.clone(),
        acceptance: Box::new(SimulatedAcceptance::new(latency)),
        delivery: Box::new(EmailJsDelivery::new(
            config.emailjs_public_key.clone(),
            config.emailjs_service_id.clone(),
            config.emailjs_template_id.clone(),
        )),
    });

    if !config.email_configured() {
        tracing::warn!("EmailJS secrets missing; the contact form will report itself unconfigured");
    }

    // Walk one booking through the happy path.
    let form = BookingForm::new(Arc::clone(&state));
    let request = BookingRequest {
        name: "Jane Doe".to_string(),
        phone: "555-0100".to_string(),
        email: "jane@example.com".to_string(),
        service: "Laptop Repair".to_string(),
        date: "2024-12-01".to_string(),
        device: Some("MacBook Pro 2019".to_string()),
        description: "Screen is cracked and black".to_string(),
    };
    let booking = form.submit(&request).await?;
    tracing::info!(id = %booking.id, status = booking.status.as_str(), "booking accepted");

    // And look it up the way the status widget would.
    let tracker = StatusTracker::new(Arc::new(StoreStatusLookup::new(store, latency)));
    tracker.check_status(&booking.id).await;
    match tracker.state() {
        TrackerState::Resolved(report) => {
            tracing::info!(
                id = %report.repair_id,
                stage = report.current_stage.display_name(),
                eta = %report.estimated_completion,
                "status resolved"
            );
        }
        other => tracing::warn!(state = ?other, "unexpected tracker state"),
    }

    Ok(())
}
