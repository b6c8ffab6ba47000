//! DatasetStatus enum for the shipment-history gate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of the historical shipment dataset.
///
/// Decisions are only computed against a `Validated` dataset. The gate
/// opens once and never closes again; later appends keep it open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DatasetStatus {
    #[default]
    Locked,
    Validated,
}

impl DatasetStatus {
    /// Returns true while no validated data is available.
    pub fn is_locked(&self) -> bool {
        matches!(self, DatasetStatus::Locked)
    }
}

impl StateMachine for DatasetStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (DatasetStatus::Locked, DatasetStatus::Validated))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            DatasetStatus::Locked => vec![DatasetStatus::Validated],
            DatasetStatus::Validated => vec![],
        }
    }
}

impl fmt::Display for DatasetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DatasetStatus::Locked => "Locked",
            DatasetStatus::Validated => "Validated",
        };
        write!(f, "{}", s)
    }
}
