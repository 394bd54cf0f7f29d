use serde::{Deserialize, Serialize};

use crate::models::{RepairStage, StageState};

/// Result of a status lookup. Held only by the tracker widget, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusReport {
    pub repair_id: String,
    pub current_stage: RepairStage,
    pub estimated_completion: String,
    pub technician: String,
    pub notes: Option<String>,
}

impl StatusReport {
    /// Project the full pipeline for rendering: every stage in fixed order,
    /// tagged complete/active/pending relative to the current stage.
    pub fn progress(&self) -> [(RepairStage, StageState); 5] {
        RepairStage::ALL.map(|stage| (stage, stage.state_relative_to(self.current_stage)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_marks_stages_around_current() {
        let report = StatusReport {
            repair_id: "TRK-1".to_string(),
            current_stage: RepairStage::Repair,
            estimated_completion: "2024-12-01".to_string(),
            technician: "Alex Chen".to_string(),
            notes: None,
        };

        let progress = report.progress();
        let states: Vec<StageState> = progress.iter().map(|(_, s)| *s).collect();
        assert_eq!(
            states,
            vec![
                StageState::Complete,
                StageState::Complete,
                StageState::Active,
                StageState::Pending,
                StageState::Pending,
            ]
        );
        // Stages come back in pipeline order regardless of the current stage.
        let stages: Vec<RepairStage> = progress.iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, RepairStage::ALL.to_vec());
    }

    #[test]
    fn test_progress_at_final_stage() {
        let report = StatusReport {
            repair_id: "TRK-2".to_string(),
            current_stage: RepairStage::Ready,
            estimated_completion: "2024-12-01".to_string(),
            technician: "Alex Chen".to_string(),
            notes: None,
        };

        let states: Vec<StageState> = report.progress().iter().map(|(_, s)| *s).collect();
        assert_eq!(states[..4], [StageState::Complete; 4]);
        assert_eq!(states[4], StageState::Active);
    }
}
