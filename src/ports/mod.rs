//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `ShipmentHistory` - Gated, read-only access to historical shipments

mod shipment_history;

pub use shipment_history::{HistorySnapshot, ShipmentHistory};
