//! Decision - the immutable outcome of one orchestration call.

use serde::{Deserialize, Serialize};

use super::CriteriaWeights;
use crate::domain::analysis::TopsisResult;
use crate::domain::foundation::{DecisionId, Timestamp};

/// Data version recorded when the dataset carries none.
pub const UNKNOWN_DATA_VERSION: &str = "unknown";

/// A ranked forwarder decision with its explanation.
///
/// Produced once and never updated; a later call supersedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    /// Best first.
    pub ranking: Vec<TopsisResult>,
    pub criteria_weights: CriteriaWeights,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
    pub audit_text: String,
    pub data_version: String,
    pub timestamp: Timestamp,
}

impl Decision {
    /// The top-ranked result.
    pub fn recommended(&self) -> Option<&TopsisResult> {
        self.ranking.first()
    }

    /// Rank of the named forwarder, if it was a candidate.
    pub fn rank_of(&self, forwarder: &str) -> Option<usize> {
        self.ranking
            .iter()
            .find(|r| r.alternative.name == forwarder)
            .map(|r| r.rank)
    }
}
