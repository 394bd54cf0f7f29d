use serde::{Deserialize, Serialize};

/// The fixed repair pipeline. Every booking is at exactly one of these
/// stages; the order never changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepairStage {
    Received,
    Diagnosis,
    Repair,
    Testing,
    Ready,
}

/// How a single stage renders relative to the stage a repair is currently at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Complete,
    Active,
    Pending,
}

impl RepairStage {
    pub const ALL: [RepairStage; 5] = [
        RepairStage::Received,
        RepairStage::Diagnosis,
        RepairStage::Repair,
        RepairStage::Testing,
        RepairStage::Ready,
    ];

    /// 1-based position in the pipeline.
    pub fn index(self) -> u8 {
        match self {
            RepairStage::Received => 1,
            RepairStage::Diagnosis => 2,
            RepairStage::Repair => 3,
            RepairStage::Testing => 4,
            RepairStage::Ready => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index.checked_sub(1)? as usize).copied()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RepairStage::Received => "Received",
            RepairStage::Diagnosis => "Diagnosis",
            RepairStage::Repair => "Repair",
            RepairStage::Testing => "Testing",
            RepairStage::Ready => "Ready",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RepairStage::Received => "clipboard-check",
            RepairStage::Diagnosis => "search",
            RepairStage::Repair => "tools",
            RepairStage::Testing => "check-circle",
            RepairStage::Ready => "truck",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RepairStage::Received => {
                "We have received your device and are diagnosing the issue."
            }
            RepairStage::Diagnosis => "Diagnosing the issue.",
            RepairStage::Repair => "Repair work is in progress.",
            RepairStage::Testing => "Quality testing.",
            RepairStage::Ready => "Ready for pickup/delivery.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RepairStage::Received => "received",
            RepairStage::Diagnosis => "diagnosis",
            RepairStage::Repair => "repair",
            RepairStage::Testing => "testing",
            RepairStage::Ready => "ready",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "diagnosis" => RepairStage::Diagnosis,
            "repair" => RepairStage::Repair,
            "testing" => RepairStage::Testing,
            "ready" => RepairStage::Ready,
            _ => RepairStage::Received,
        }
    }

    /// How this stage renders when `current` is the stage a repair is at:
    /// earlier stages are complete, the current one active, later ones pending.
    pub fn state_relative_to(self, current: RepairStage) -> StageState {
        match self.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => StageState::Complete,
            std::cmp::Ordering::Equal => StageState::Active,
            std::cmp::Ordering::Greater => StageState::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_has_five_ordered_stages() {
        assert_eq!(RepairStage::ALL.len(), 5);
        for (pos, stage) in RepairStage::ALL.iter().enumerate() {
            assert_eq!(stage.index() as usize, pos + 1);
            assert_eq!(RepairStage::from_index(stage.index()), Some(*stage));
        }
        assert_eq!(RepairStage::from_index(0), None);
        assert_eq!(RepairStage::from_index(6), None);
    }

    #[test]
    fn test_str_round_trip() {
        for stage in RepairStage::ALL {
            assert_eq!(RepairStage::from_str(stage.as_str()), stage);
        }
        // Unknown strings fall back to the initial stage.
        assert_eq!(RepairStage::from_str("shipped"), RepairStage::Received);
    }

    #[test]
    fn test_state_relative_to_current() {
        let current = RepairStage::Repair;
        assert_eq!(
            RepairStage::Received.state_relative_to(current),
            StageState::Complete
        );
        assert_eq!(
            RepairStage::Diagnosis.state_relative_to(current),
            StageState::Complete
        );
        assert_eq!(
            RepairStage::Repair.state_relative_to(current),
            StageState::Active
        );
        assert_eq!(
            RepairStage::Testing.state_relative_to(current),
            StageState::Pending
        );
        assert_eq!(
            RepairStage::Ready.state_relative_to(current),
            StageState::Pending
        );
    }
}
