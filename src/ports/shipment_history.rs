//! Shipment history port (read side).
//!
//! The engine's only inbound dependency: a gated, read-only view of the
//! historical shipment dataset. Loading and validating the data happens
//! elsewhere; the engine only asks whether the gate is open and reads a
//! frozen snapshot.

use std::sync::Arc;

use crate::domain::freight::{DataVersion, ShipmentRecord};

/// A frozen view of the dataset.
///
/// Records and version are captured together, so an append that lands
/// after the snapshot was taken is invisible to its holder.
#[derive(Debug, Clone)]
pub struct HistorySnapshot {
    pub records: Arc<[ShipmentRecord]>,
    pub version: Option<DataVersion>,
}

/// Reader port for historical shipments.
pub trait ShipmentHistory: Send + Sync {
    /// True until the dataset has been loaded and validated.
    fn is_locked(&self) -> bool;

    /// Current snapshot, or `None` while the dataset is locked.
    fn snapshot(&self) -> Option<HistorySnapshot>;

    /// Current records, or `None` while the dataset is locked.
    fn records(&self) -> Option<Arc<[ShipmentRecord]>> {
        self.snapshot().map(|s| s.records)
    }

    /// Version of the current dataset, if one has been loaded.
    fn data_version(&self) -> Option<DataVersion> {
        self.snapshot().and_then(|s| s.version)
    }
}
