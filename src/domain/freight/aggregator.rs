//! Forwarder aggregation - shipment history to per-forwarder profiles.

use std::collections::HashMap;
use tracing::{debug, warn};

use super::{ForwarderProfile, ShipmentRecord};

/// Share of the reliability score carried by the on-time rate.
pub const ON_TIME_WEIGHT: f64 = 0.7;

/// Share of the reliability score carried by transit consistency.
pub const CONSISTENCY_WEIGHT: f64 = 0.3;

/// Risk points added per average day of delay.
pub const RISK_PER_DELAY_DAY: f64 = 5.0;

/// Reduces shipment records to one profile per forwarder.
///
/// Pure and stateless. Malformed numeric cells are dropped from the
/// aggregate they feed without affecting the rest of the record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwarderAggregator;

#[derive(Default)]
struct Group<'a> {
    name: &'a str,
    shipments: usize,
    total_cost: f64,
    total_weight: f64,
    transit: Vec<f64>,
    delays: Vec<f64>,
    malformed: usize,
}

impl<'a> Group<'a> {
    fn observe(&mut self, record: &ShipmentRecord) {
        self.shipments += 1;

        // Cost/kg only sees shipments with both cost and weight readable.
        match (record.cost(), record.weight_kg()) {
            (Some(cost), Some(weight)) => {
                self.total_cost += cost;
                self.total_weight += weight;
            }
            _ if record.cost.is_none() && record.weight_kg.is_none() => {}
            _ => self.malformed += 1,
        }

        if let Some(days) = record.transit_days() {
            self.transit.push(days);
        } else if record.transit_days.is_some() {
            self.malformed += 1;
        }

        match record.delay_days() {
            Some(delay) => self.delays.push(delay),
            None => self.malformed += 1,
        }
    }

    fn into_profile(self) -> ForwarderProfile {
        let avg_cost_per_kg = if self.total_weight > 0.0 {
            self.total_cost / self.total_weight
        } else {
            0.0
        };

        let avg_transit_days = mean(&self.transit);
        let consistency_factor = if self.transit.len() >= 2 && avg_transit_days > 0.0 {
            (1.0 - population_std_dev(&self.transit, avg_transit_days) / avg_transit_days).max(0.0)
        } else {
            1.0
        };

        let on_time_rate = if self.delays.is_empty() {
            0.0
        } else {
            self.delays.iter().filter(|d| **d <= 0.0).count() as f64 / self.delays.len() as f64
        };
        let avg_delay_days = mean(&self.delays);

        let reliability_score =
            100.0 * (ON_TIME_WEIGHT * on_time_rate + CONSISTENCY_WEIGHT * consistency_factor);
        let risk_level =
            ((1.0 - on_time_rate) * 100.0 + avg_delay_days * RISK_PER_DELAY_DAY).clamp(0.0, 100.0);

        if self.malformed > 0 {
            warn!(
                forwarder = %self.name,
                malformed_fields = self.malformed,
                "Excluded unparsable shipment fields from aggregation"
            );
        }

        ForwarderProfile {
            name: self.name.to_string(),
            avg_cost_per_kg,
            avg_transit_days,
            on_time_rate,
            avg_delay_days,
            consistency_factor,
            reliability_score,
            risk_level,
            shipment_count: self.shipments,
        }
    }
}

impl ForwarderAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Builds profiles for every forwarder in `records`.
    ///
    /// Output is ordered by shipment count descending; equal counts keep
    /// first-seen order.
    pub fn aggregate(&self, records: &[ShipmentRecord]) -> Vec<ForwarderProfile> {
        let mut groups: Vec<Group<'_>> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in records {
            let key = record.forwarder_key();
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(Group {
                    name: key,
                    ..Group::default()
                });
                groups.len() - 1
            });
            groups[slot].observe(record);
        }

        let mut profiles: Vec<ForwarderProfile> =
            groups.into_iter().map(Group::into_profile).collect();
        profiles.sort_by(|a, b| b.shipment_count.cmp(&a.shipment_count));

        debug!(
            records = records.len(),
            forwarders = profiles.len(),
            "Aggregated shipment history"
        );

        profiles
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance =
        values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
