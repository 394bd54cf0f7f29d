use std::sync::{Arc, Mutex};

use crate::models::StatusReport;
use crate::services::lookup::StatusLookup;

/// Where the tracker widget is in its lifecycle. `NotFound` and `Failed`
/// are distinct from each other and from `Loading` so the widget can show
/// the right message for each.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    Idle,
    Loading,
    Resolved(StatusReport),
    NotFound { repair_id: String },
    Failed(String),
}

/// The repair-status lookup widget.
pub struct StatusTracker {
    lookup: Arc<dyn StatusLookup>,
    state: Mutex<TrackerState>,
}

impl StatusTracker {
    pub fn new(lookup: Arc<dyn StatusLookup>) -> Self {
        Self {
            lookup,
            state: Mutex::new(TrackerState::Idle),
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state.lock().unwrap(), TrackerState::Loading)
    }

    /// Run a lookup for the given tracking id. Empty or whitespace-only
    /// input is ignored without a transition or message; a lookup already
    /// in flight likewise leaves the trigger dead.
    pub async fn check_status(&self, repair_id: &str) {
        let repair_id = repair_id.trim();
        if repair_id.is_empty() {
            return;
        }

        {
            let mut state = self.state.lock().unwrap();
            if matches!(*state, TrackerState::Loading) {
                return;
            }
            *state = TrackerState::Loading;
        }

        let next = match self.lookup.find(repair_id).await {
            Ok(Some(report)) => {
                tracing::info!(id = %repair_id, stage = report.current_stage.as_str(), "status resolved");
                TrackerState::Resolved(report)
            }
            Ok(None) => {
                tracing::info!(id = %repair_id, "no booking for tracking id");
                TrackerState::NotFound {
                    repair_id: repair_id.to_string(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "status lookup failed");
                TrackerState::Failed(
                    "We couldn't check that repair right now. Please try again.".to_string(),
                )
            }
        };

        *self.state.lock().unwrap() = next;
    }
}
