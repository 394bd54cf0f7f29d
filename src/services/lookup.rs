use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::models::StatusReport;
use crate::store::BookingStore;

// Placeholder until bookings carry a real technician assignment.
const DEFAULT_TECHNICIAN: &str = "Alex Chen";
const DEFAULT_NOTES: &str = "Your device is being repaired with high priority.";

/// The status backend seam: resolve a tracking id to a report, `None` for
/// unknown ids.
#[async_trait]
pub trait StatusLookup: Send + Sync {
    async fn find(&self, repair_id: &str) -> anyhow::Result<Option<StatusReport>>;
}

/// Resolves status deterministically against the in-memory booking store.
/// Estimated completion echoes the booking's preferred date; technician and
/// notes are placeholders the store doesn't carry.
pub struct StoreStatusLookup {
    store: Arc<Mutex<BookingStore>>,
    latency: Duration,
}

impl StoreStatusLookup {
    pub fn new(store: Arc<Mutex<BookingStore>>, latency: Duration) -> Self {
        Self { store, latency }
    }
}

#[async_trait]
impl StatusLookup for StoreStatusLookup {
    async fn find(&self, repair_id: &str) -> anyhow::Result<Option<StatusReport>> {
        tokio::time::sleep(self.latency).await;

        let store = self.store.lock().unwrap();
        Ok(store.get(repair_id).map(|booking| StatusReport {
            repair_id: booking.id.clone(),
            current_stage: booking.status,
            estimated_completion: booking.date.clone(),
            technician: DEFAULT_TECHNICIAN.to_string(),
            notes: Some(DEFAULT_NOTES.to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingRequest, RepairStage};

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
    async fn test_find_known_booking() {
        let store = Arc::new(Mutex::new(BookingStore::new()));
        let id = store.lock().unwrap().add_booking(&request()).id;
        store
            .lock()
            .unwrap()
            .update_booking_status(&id, RepairStage::Testing);

        let lookup = StoreStatusLookup::new(store, Duration::ZERO);
        let report = lookup.find(&id).await.unwrap().unwrap();

        assert_eq!(report.repair_id, id);
        assert_eq!(report.current_stage, RepairStage::Testing);
        assert_eq!(report.estimated_completion, "2024-12-01");
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let store = Arc::new(Mutex::new(BookingStore::new()));
        let lookup = StoreStatusLookup::new(store, Duration::ZERO);
        assert!(lookup.find("TRK-unknown").await.unwrap().is_none());
    }
}
