//! Freight Module - Shipment history and forwarder performance.
//!
//! # Components
//!
//! - `ShipmentRecord` - One historical shipment with loosely-typed numeric columns
//! - `ForwarderAggregator` - Reduces shipments to one `ForwarderProfile` per forwarder
//! - `DataVersion` - Fingerprint of a loaded dataset

mod aggregator;
mod data_version;
mod profile;
mod shipment;

pub use aggregator::{ForwarderAggregator, CONSISTENCY_WEIGHT, ON_TIME_WEIGHT, RISK_PER_DELAY_DAY};
pub use data_version::DataVersion;
pub use profile::ForwarderProfile;
pub use shipment::{NumericField, ShipmentRecord, UNKNOWN_FORWARDER};
