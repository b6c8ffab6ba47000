//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `history` - Shipment history stores (in-memory)

pub mod history;

pub use history::InMemoryShipmentHistory;
