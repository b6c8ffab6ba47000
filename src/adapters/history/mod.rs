//! Shipment History Adapters
//!
//! Implementations of the `ShipmentHistory` port.
//!
//! ## Available Adapters
//!
//! - **InMemoryShipmentHistory** - Gated in-memory dataset with snapshot reads
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::history::InMemoryShipmentHistory;
//!
//! let history = InMemoryShipmentHistory::new();
//! history.load(records, "shipments-2024.csv")?;
//! ```

mod in_memory;

pub use in_memory::InMemoryShipmentHistory;
