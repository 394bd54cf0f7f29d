use serde::{Deserialize, Serialize};

/// The fixed set of services customers can book. Booking validation rejects
/// anything outside this list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceKind {
    LaptopRepair,
    DesktopRepair,
    VirusRemoval,
    DataRecovery,
    NetworkSetup,
    DeviceSetup,
    Other,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 7] = [
        ServiceKind::LaptopRepair,
        ServiceKind::DesktopRepair,
        ServiceKind::VirusRemoval,
        ServiceKind::DataRecovery,
        ServiceKind::NetworkSetup,
        ServiceKind::DeviceSetup,
        ServiceKind::Other,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ServiceKind::LaptopRepair => "Laptop Repair",
            ServiceKind::DesktopRepair => "Desktop Repair",
            ServiceKind::VirusRemoval => "Virus Removal",
            ServiceKind::DataRecovery => "Data Recovery",
            ServiceKind::NetworkSetup => "Network Setup",
            ServiceKind::DeviceSetup => "Device Setup",
            ServiceKind::Other => "Other",
        }
    }

    /// Strict parse from the display name used in the booking form.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.display_name() == s)
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ServiceKind::LaptopRepair => {
                "Screen replacement, keyboard fixes, battery issues, and more"
            }
            ServiceKind::DesktopRepair => {
                "Hardware upgrades, motherboard issues, power supply problems"
            }
            ServiceKind::VirusRemoval => {
                "Complete malware and virus removal with system optimization"
            }
            ServiceKind::DataRecovery => {
                "Recover lost files from damaged drives and corrupted systems"
            }
            ServiceKind::NetworkSetup => {
                "Home and office network installation and troubleshooting"
            }
            ServiceKind::DeviceSetup => {
                "Smartphone, tablet, and peripheral device configuration"
            }
            ServiceKind::Other => "Anything else, just tell us what's wrong",
        }
    }

    /// Starting price in dollars; `Other` is quoted case by case.
    pub fn price_from(self) -> Option<u32> {
        match self {
            ServiceKind::LaptopRepair => Some(79),
            ServiceKind::DesktopRepair => Some(69),
            ServiceKind::VirusRemoval => Some(99),
            ServiceKind::DataRecovery => Some(149),
            ServiceKind::NetworkSetup => Some(129),
            ServiceKind::DeviceSetup => Some(49),
            ServiceKind::Other => None,
        }
    }
}
