use serde::{Deserialize, Serialize};

/// Process-wide request status shown by the UI (progress bar, disabled buttons).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Status of a single list or task, so one record can be disabled without
/// touching its neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

impl EntityStatus {
    pub fn is_busy(self) -> bool {
        self == EntityStatus::Loading
    }
}
