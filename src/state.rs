use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::services::acceptance::BookingAcceptance;
use crate::services::delivery::MessageDelivery;
use crate::store::BookingStore;

pub struct AppState {
    pub store: Arc<Mutex<BookingStore>>,
    pub config: AppConfig,
    pub acceptance: Box<dyn BookingAcceptance>,
    pub delivery: Box<dyn MessageDelivery>,
}
