//! Historical shipment records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group name for records that carry no forwarder.
pub const UNKNOWN_FORWARDER: &str = "Unknown";

/// A numeric column that may arrive as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Parses the field, returning `None` for text that is not a finite number.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            NumericField::Number(n) => *n,
            NumericField::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// One historical shipment.
///
/// Numeric columns stay in their raw form; parsing happens at aggregation
/// time so that a bad cell only affects the aggregate it belongs to.
/// Columns the engine does not use are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub forwarder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_days: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_days: Option<NumericField>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ShipmentRecord {
    pub fn new(forwarder: impl Into<String>) -> Self {
        Self {
            forwarder: forwarder.into(),
            ..Self::default()
        }
    }

    pub fn with_cost(mut self, cost: impl Into<NumericField>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    pub fn with_weight_kg(mut self, weight: impl Into<NumericField>) -> Self {
        self.weight_kg = Some(weight.into());
        self
    }

    pub fn with_transit_days(mut self, days: impl Into<NumericField>) -> Self {
        self.transit_days = Some(days.into());
        self
    }

    pub fn with_delay_days(mut self, days: impl Into<NumericField>) -> Self {
        self.delay_days = Some(days.into());
        self
    }

    pub fn with_shipment_id(mut self, id: impl Into<String>) -> Self {
        self.shipment_id = Some(id.into());
        self
    }

    /// Forwarder group key; blank names fall into [`UNKNOWN_FORWARDER`].
    pub fn forwarder_key(&self) -> &str {
        let name = self.forwarder.trim();
        if name.is_empty() {
            UNKNOWN_FORWARDER
        } else {
            name
        }
    }

    pub fn cost(&self) -> Option<f64> {
        positive(self.cost.as_ref())
    }

    pub fn weight_kg(&self) -> Option<f64> {
        positive(self.weight_kg.as_ref())
    }

    pub fn transit_days(&self) -> Option<f64> {
        positive(self.transit_days.as_ref())
    }

    /// Delay in days. An absent column counts as on time (0); a present
    /// but unparsable one yields `None`.
    pub fn delay_days(&self) -> Option<f64> {
        match &self.delay_days {
            None => Some(0.0),
            Some(field) => field.parse(),
        }
    }

    /// True when a delay cell is present but could not be parsed.
    pub fn has_malformed_delay(&self) -> bool {
        self.delay_days.as_ref().is_some_and(|f| f.parse().is_none())
    }
}

fn positive(field: Option<&NumericField>) -> Option<f64> {
    field.and_then(NumericField::parse).filter(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_field_parses_numbers_and_text() {
        assert_eq!(NumericField::from(4.5).parse(), Some(4.5));
        assert_eq!(NumericField::from(" 12.25 ").parse(), Some(12.25));
        assert_eq!(NumericField::from("n/a").parse(), None);
        assert_eq!(NumericField::from("inf").parse(), None);
    }

    #[test]
    fn non_positive_measures_are_excluded() {
        let record = ShipmentRecord::new("Bolloré")
            .with_cost(0.0)
            .with_weight_kg(-3.0)
            .with_transit_days("7");
        assert_eq!(record.cost(), None);
        assert_eq!(record.weight_kg(), None);
        assert_eq!(record.transit_days(), Some(7.0));
    }

    #[test]
    fn absent_delay_counts_as_on_time() {
        let record = ShipmentRecord::new("Kuehne");
        assert_eq!(record.delay_days(), Some(0.0));
        assert!(!record.has_malformed_delay());
    }

    #[test]
    fn malformed_delay_is_flagged() {
        let record = ShipmentRecord::new("Kuehne").with_delay_days("late");
        assert_eq!(record.delay_days(), None);
        assert!(record.has_malformed_delay());
    }

    #[test]
    fn negative_delay_is_kept() {
        let record = ShipmentRecord::new("Kuehne").with_delay_days(-1.0);
        assert_eq!(record.delay_days(), Some(-1.0));
    }

    #[test]
    fn blank_forwarder_groups_as_unknown() {
        assert_eq!(ShipmentRecord::new("  ").forwarder_key(), UNKNOWN_FORWARDER);
        assert_eq!(ShipmentRecord::new(" DHL ").forwarder_key(), "DHL");
    }

    #[test]
    fn deserializes_loosely_typed_row() {
        let json = r#"{
            "shipment_id": "SR_24-001",
            "forwarder": "Siginon",
            "cost": "1250.50",
            "weight_kg": 500,
            "transit_days": "6",
            "carrier": "Kenya Airways"
        }"#;
        let record: ShipmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cost(), Some(1250.5));
        assert_eq!(record.weight_kg(), Some(500.0));
        assert_eq!(record.transit_days(), Some(6.0));
        assert_eq!(record.delay_days(), Some(0.0));
        assert_eq!(
            record.extra.get("carrier"),
            Some(&serde_json::Value::String("Kenya Airways".to_string()))
        );
    }
}
