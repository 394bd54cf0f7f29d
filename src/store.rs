use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Booking, BookingRequest, RepairStage};

/// Process-wide booking state. Fields are private: every mutation goes
/// through one of the four actions below, and the mapping is append-only
/// except for each booking's status.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: HashMap<String, Booking>,
    current: Option<Booking>,
    loading: bool,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated request as a new booking: fresh tracking id,
    /// initial `Received` status, creation timestamp. The new booking
    /// becomes the current one. Callers validate before calling; there is
    /// no error path here.
    pub fn add_booking(&mut self, request: &BookingRequest) -> Booking {
        let id = format!("TRK-{}", Uuid::new_v4().simple());
        let booking = Booking::from_request(id, request, Utc::now().naive_utc());

        tracing::info!(id = %booking.id, service = ?booking.service, "booking recorded");

        self.bookings.insert(booking.id.clone(), booking.clone());
        self.current = Some(booking.clone());
        booking
    }

    /// Re-select a previously created booking without touching the mapping.
    pub fn set_current_booking(&mut self, booking: Booking) {
        self.current = Some(booking);
    }

    /// Observational busy flag for the UI; no effect on other actions.
    pub fn set_loading(&mut self, flag: bool) {
        self.loading = flag;
    }

    /// Overwrite the status of an existing booking. Unknown ids are a
    /// silent no-op.
    pub fn update_booking_status(&mut self, id: &str, status: RepairStage) {
        if let Some(booking) = self.bookings.get_mut(id) {
            booking.status = status;
        }
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.get(id)
    }

    pub fn current_booking(&self) -> Option<&Booking> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
