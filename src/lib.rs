//! DeepCAL Engine - Freight Forwarder Decision Engine
//!
//! This crate ranks freight forwarders from historical shipment data using a
//! neutrosophic AHP weight elicitor combined with TOPSIS, and explains each
//! ranking with an audit trail.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
