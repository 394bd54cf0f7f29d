use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{RepairStage, ServiceKind};

/// Raw booking form input, exactly as collected: every field a string until
/// validation has passed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub device: Option<String>,
    pub description: String,
}

/// A recorded repair booking. Created only by the store from a validated
/// request; after creation, only `status` ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub status: RepairStage,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: ServiceKind,
    pub date: String,
    pub device: Option<String>,
    pub description: String,
}

impl Booking {
    /// Cut a record from a validated request. The caller has already checked
    /// the service name against `ServiceKind`; an unknown name falls back to
    /// `Other` rather than failing here.
    pub fn from_request(id: String, request: &BookingRequest, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            status: RepairStage::Received,
            created_at,
            name: request.name.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            service: ServiceKind::parse(&request.service).unwrap_or(ServiceKind::Other),
            date: request.date.clone(),
            device: request.device.clone(),
            description: request.description.clone(),
        }
    }
}
