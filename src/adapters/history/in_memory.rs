//! In-Memory Shipment History Adapter
//!
//! Holds the shipment dataset behind the Locked -> Validated gate.
//! Readers get immutable snapshots; loads and appends swap in a new one.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::domain::foundation::{
    DatasetStatus, DomainError, ErrorCode, StateMachine, ValidationError,
};
use crate::domain::freight::{DataVersion, ShipmentRecord};
use crate::ports::{HistorySnapshot, ShipmentHistory};

#[derive(Debug)]
struct Dataset {
    status: DatasetStatus,
    records: Arc<[ShipmentRecord]>,
    version: Option<DataVersion>,
    revision: u32,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            status: DatasetStatus::Locked,
            records: Arc::from(Vec::new()),
            version: None,
            revision: 0,
        }
    }
}

/// In-memory shipment history.
///
/// Cloning shares the underlying dataset.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipmentHistory {
    dataset: Arc<RwLock<Dataset>>,
}

impl InMemoryShipmentHistory {
    /// Creates an empty, locked history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for tests and fixtures: a history already loaded with `records`.
    pub fn validated(
        records: Vec<ShipmentRecord>,
        source: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let history = Self::new();
        history.load(records, source)?;
        Ok(history)
    }

    /// Replaces the dataset with `records` and opens the gate.
    ///
    /// # Errors
    ///
    /// `INVALID_FORMAT` if `records` is empty.
    pub fn load(
        &self,
        records: Vec<ShipmentRecord>,
        source: impl Into<String>,
    ) -> Result<DataVersion, DomainError> {
        if records.is_empty() {
            return Err(ValidationError::invalid_format("records", "batch is empty").into());
        }

        let mut dataset = self.dataset.write().unwrap_or_else(PoisonError::into_inner);
        let revision = dataset.revision + 1;
        let version = DataVersion::compute(&records, source, revision)?;

        if dataset.status.is_locked() {
            dataset.status = dataset
                .status
                .transition_to(DatasetStatus::Validated)
                .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        }

        dataset.records = Arc::from(records);
        dataset.version = Some(version.clone());
        dataset.revision = revision;

        info!(
            version = %version.version,
            source = %version.source,
            records = version.record_count,
            "Shipment history validated"
        );

        Ok(version)
    }

    /// Appends `records` to a validated dataset.
    ///
    /// # Errors
    ///
    /// `DATA_NOT_LOADED` while the dataset is still locked.
    pub fn append(&self, records: Vec<ShipmentRecord>) -> Result<DataVersion, DomainError> {
        let mut dataset = self.dataset.write().unwrap_or_else(PoisonError::into_inner);
        if dataset.status.is_locked() {
            return Err(DomainError::new(
                ErrorCode::DataNotLoaded,
                "Cannot append to a locked shipment history",
            ));
        }

        let source = dataset
            .version
            .as_ref()
            .map(|v| v.source.clone())
            .unwrap_or_default();
        let combined: Vec<ShipmentRecord> =
            dataset.records.iter().cloned().chain(records).collect();

        let revision = dataset.revision + 1;
        let version = DataVersion::compute(&combined, source, revision)?;
        dataset.records = Arc::from(combined);
        dataset.version = Some(version.clone());
        dataset.revision = revision;

        info!(
            version = %version.version,
            records = version.record_count,
            "Shipment history extended"
        );

        Ok(version)
    }

    /// Current gate status.
    pub fn status(&self) -> DatasetStatus {
        self.read().status
    }

    /// Number of records currently held.
    pub fn record_count(&self) -> usize {
        self.read().records.len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Dataset> {
        self.dataset.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ShipmentHistory for InMemoryShipmentHistory {
    fn is_locked(&self) -> bool {
        self.read().status.is_locked()
    }

    fn snapshot(&self) -> Option<HistorySnapshot> {
        let dataset = self.read();
        if dataset.status.is_locked() {
            return None;
        }
        Some(HistorySnapshot {
            records: Arc::clone(&dataset.records),
            version: dataset.version.clone(),
        })
    }
}
