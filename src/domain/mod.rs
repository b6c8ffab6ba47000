//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, dataset gate, errors)
//! - `analysis` - Pure decision procedures (neutrosophic AHP, TOPSIS)
//! - `freight` - Shipment records and forwarder performance profiles
//! - `decision` - Freight criteria, default judgments, and the `Decision` snapshot

pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod freight;
