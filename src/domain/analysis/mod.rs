//! Analysis Module - Pure multi-criteria decision procedures.
//!
//! # Components
//!
//! - `Tnn` - Neutrosophic (truth, indeterminacy, falsity) judgment
//! - `NeutrosophicAhp` - Criterion weights and consistency ratio from pairwise judgments
//! - `TopsisRanker` - Closeness-to-ideal ranking of alternatives
//!
//! # Design Philosophy
//!
//! Everything here is pure and stateless. Inputs are domain values, outputs
//! are computed results. No ports or adapters are involved.

mod ahp;
mod errors;
mod neutrosophic;
mod topsis;

pub use ahp::{
    crisp_value, random_index, AhpOptions, AhpResult, NeutrosophicAhp, PairwiseJudgment,
    PairwiseJudgments, PairwiseMatrix, CONVERGENCE_TOLERANCE, DEFAULT_CONSISTENCY_THRESHOLD,
    DEFAULT_MAX_ITERATIONS, MIN_CRISP_VALUE, RANDOM_INDEX,
};
pub use errors::AnalysisError;
pub use neutrosophic::{Tnn, MAX_COMPONENT_SUM};
pub use topsis::{Alternative, Criterion, CriterionDirection, TopsisRanker, TopsisResult};
