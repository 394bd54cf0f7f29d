pub mod booking;
pub mod contact;
pub mod service;
pub mod stage;
pub mod status;

pub use booking::{Booking, BookingRequest};
pub use contact::{ContactRequest, ContactSubject};
pub use service::ServiceKind;
pub use stage::{RepairStage, StageState};
pub use status::StatusReport;
