//! Decision Module - Freight-specific decision vocabulary.
//!
//! Binds the generic analysis procedures to the four freight criteria:
//! default judgments, criterion directions, profile scaling, the
//! `Decision` snapshot, and its audit trail.

mod audit;
mod criteria;
#[allow(clippy::module_inception)]
mod decision;
mod errors;

pub use audit::render_audit_trail;
pub use criteria::{
    validate_judgments, CriteriaWeights, FreightCriterion, ProfileScaling, DEFAULT_JUDGMENTS,
};
pub use decision::{Decision, UNKNOWN_DATA_VERSION};
pub use errors::DecisionError;
