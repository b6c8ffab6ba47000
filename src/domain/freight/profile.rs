//! Per-forwarder performance profile.

use serde::{Deserialize, Serialize};

/// Aggregated performance of one forwarder over the shipment history.
///
/// Values are kept at full precision; display rounding is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwarderProfile {
    pub name: String,
    /// Σcost / Σweight over shipments with valid cost and weight.
    pub avg_cost_per_kg: f64,
    pub avg_transit_days: f64,
    /// Fraction in `[0, 1]` of shipments delivered with delay <= 0.
    pub on_time_rate: f64,
    pub avg_delay_days: f64,
    /// `max(0, 1 - stddev/mean)` of transit days; 1 with fewer than two points.
    pub consistency_factor: f64,
    /// `[0, 100]`
    pub reliability_score: f64,
    /// `[0, 100]`
    pub risk_level: f64,
    pub shipment_count: usize,
}

impl ForwarderProfile {
    /// True when cost/kg or transit fell back to 0 for lack of readable data.
    ///
    /// Parsed values are strictly positive, so 0 only arises from the default.
    pub fn has_default_metrics(&self) -> bool {
        self.avg_cost_per_kg <= 0.0 || self.avg_transit_days <= 0.0
    }
}
