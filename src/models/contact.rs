use serde::{Deserialize, Serialize};

/// Raw contact form input. Never persisted; forwarded to the delivery
/// collaborator once validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// The fixed set of contact subjects offered by the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    General,
    Support,
    Billing,
    Feedback,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::General,
        ContactSubject::Support,
        ContactSubject::Billing,
        ContactSubject::Feedback,
        ContactSubject::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Support => "support",
            ContactSubject::Billing => "billing",
            ContactSubject::Feedback => "feedback",
            ContactSubject::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|subject| subject.as_str() == s)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Support => "Technical Support",
            ContactSubject::Billing => "Billing Question",
            ContactSubject::Feedback => "Feedback",
            ContactSubject::Other => "Other",
        }
    }
}
