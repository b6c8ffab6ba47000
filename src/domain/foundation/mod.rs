//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, status enums, and error types
//! that form the vocabulary of the decision engine.

mod dataset_status;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use dataset_status::DatasetStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::DecisionId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
