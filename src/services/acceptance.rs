use std::time::Duration;

use async_trait::async_trait;

use crate::models::BookingRequest;

/// The booking backend seam. The stand-in below never fails; a real backend
/// slots in behind the same trait, so callers must handle the error arm.
#[async_trait]
pub trait BookingAcceptance: Send + Sync {
    async fn accept(&self, request: &BookingRequest) -> anyhow::Result<()>;
}

/// Stands in for the booking backend's network round trip: waits out the
/// configured latency and accepts.
pub struct SimulatedAcceptance {
    latency: Duration,
}

impl SimulatedAcceptance {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl BookingAcceptance for SimulatedAcceptance {
    async fn accept(&self, request: &BookingRequest) -> anyhow::Result<()> {
        tokio::time::sleep(self.latency).await;
        tracing::debug!(service = %request.service, "simulated booking acceptance");
        Ok(())
    }
}
