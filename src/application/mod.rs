//! Application layer - Use cases over the decision domain.
//!
//! This layer orchestrates domain operations and coordinates with ports.
//! The engine has one service, `DecisionOrchestrator`, which reads the
//! shipment history port and composes aggregation, weighting, and ranking.

mod decision_orchestrator;

pub use decision_orchestrator::{CriteriaWeighting, DecisionOrchestrator, MakeDecisionCommand};
