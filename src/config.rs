use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub business_name: String,
    pub emailjs_public_key: String,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub simulated_latency_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            business_name: env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "TechFix Pro".to_string()),
            emailjs_public_key: env::var("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
            emailjs_service_id: env::var("EMAILJS_SERVICE_ID").unwrap_or_default(),
            emailjs_template_id: env::var("EMAILJS_TEMPLATE_ID").unwrap_or_default(),
            simulated_latency_ms: env::var("SIMULATED_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
        }
    }

    /// All three EmailJS secrets must be present before delivery is attempted.
    pub fn email_configured(&self) -> bool {
        !self.emailjs_public_key.is_empty()
            && !self.emailjs_service_id.is_empty()
            && !self.emailjs_template_id.is_empty()
    }
}
