use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{BookingRequest, ContactRequest, ContactSubject, ServiceKind};

pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const NAME_MIN_LEN: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

/// One failed field: which field, and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Per-field validation failures for one form submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn email_is_valid(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate a booking request field by field. Pure: no state, no side
/// effects, safe to call from anywhere including tests.
pub fn validate_booking(request: &BookingRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }
    if request.phone.trim().is_empty() {
        errors.push("phone", "Phone is required");
    }
    if request.email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !email_is_valid(&request.email) {
        errors.push("email", "Invalid email address");
    }
    if request.service.is_empty() {
        errors.push("service", "Service is required");
    } else if ServiceKind::parse(&request.service).is_none() {
        errors.push("service", "Please select a valid service");
    }
    if request.date.trim().is_empty() {
        errors.push("date", "Date is required");
    }
    // device is optional, no constraint
    if request.description.trim().is_empty() {
        errors.push("description", "Description is required");
    } else if request.description.chars().count() < DESCRIPTION_MIN_LEN {
        errors.push(
            "description",
            "Description should be at least 10 characters long",
        );
    }

    errors.into_result()
}

/// Validate a contact request field by field.
pub fn validate_contact(request: &ContactRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.first_name.trim().is_empty() {
        errors.push("first_name", "First name is required");
    } else if request.first_name.trim().chars().count() < NAME_MIN_LEN {
        errors.push("first_name", "First name must be at least 2 characters");
    }
    if request.last_name.trim().is_empty() {
        errors.push("last_name", "Last name is required");
    } else if request.last_name.trim().chars().count() < NAME_MIN_LEN {
        errors.push("last_name", "Last name must be at least 2 characters");
    }
    if request.email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !email_is_valid(&request.email) {
        errors.push("email", "Invalid email address");
    }
    if request.subject.is_empty() {
        errors.push("subject", "Please select a subject");
    } else if ContactSubject::parse(&request.subject).is_none() {
        errors.push("subject", "Please select a subject");
    }
    // phone is optional, no constraint
    let message_len = request.message.chars().count();
    if request.message.trim().is_empty() {
        errors.push("message", "Message is required");
    } else if message_len < MESSAGE_MIN_LEN {
        errors.push("message", "Please provide more details");
    } else if message_len > MESSAGE_MAX_LEN {
        errors.push("message", "Message must be 1000 characters or fewer");
    }

    errors.into_result()
}
