//! Data version - identifies the exact shipment snapshot a decision used.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ShipmentRecord;
use crate::domain::foundation::{Timestamp, ValidationError};

/// Length of the hash prefix embedded in the version string.
const SHORT_HASH_LEN: usize = 12;

/// Fingerprint of a loaded shipment dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataVersion {
    /// `r{revision}-{short hash}`, e.g. `r1-3fa85f6457b2`.
    pub version: String,
    /// SHA-256 over the JSON encoding of the records, hex.
    pub hash: String,
    pub source: String,
    pub record_count: usize,
    pub loaded_at: Timestamp,
    pub validated: bool,
}

impl DataVersion {
    /// Fingerprints `records` as revision `revision` of the dataset.
    pub fn compute(
        records: &[ShipmentRecord],
        source: impl Into<String>,
        revision: u32,
    ) -> Result<Self, ValidationError> {
        let hash = Self::compute_hash(records)?;
        let short = hash.get(..SHORT_HASH_LEN).unwrap_or(&hash);

        Ok(Self {
            version: format!("r{}-{}", revision, short),
            hash,
            source: source.into(),
            record_count: records.len(),
            loaded_at: Timestamp::now(),
            validated: true,
        })
    }

    fn compute_hash(records: &[ShipmentRecord]) -> Result<String, ValidationError> {
        let encoded = serde_json::to_vec(records)
            .map_err(|e| ValidationError::invalid_format("records", e.to_string()))?;
        let mut hasher = Sha256::new();
        hasher.update(&encoded);
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Checks whether `records` still match this fingerprint.
    pub fn matches(&self, records: &[ShipmentRecord]) -> bool {
        Self::compute_hash(records).is_ok_and(|hash| hash == self.hash)
    }
}
