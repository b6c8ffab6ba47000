//! Decision error types.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that stop a freight decision from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("Shipment history is not loaded; load and validate data before deciding")]
    DataNotLoaded,

    #[error("No forwarders available to rank")]
    NoAlternatives,

    #[error("Missing value for criterion '{criterion}' in alternative '{alternative}'")]
    MissingValue {
        alternative: String,
        criterion: String,
    },

    #[error("Unknown criterion '{0}'")]
    UnknownCriterion(String),
}

impl DecisionError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::DataNotLoaded => ErrorCode::DataNotLoaded,
            DecisionError::NoAlternatives => ErrorCode::NoAlternatives,
            DecisionError::MissingValue { .. } => ErrorCode::MissingValue,
            DecisionError::UnknownCriterion(_) => ErrorCode::UnknownCriterion,
        }
    }
}

impl From<AnalysisError> for DecisionError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::NoAlternatives => DecisionError::NoAlternatives,
            AnalysisError::MissingValue {
                alternative,
                criterion,
            } => DecisionError::MissingValue {
                alternative,
                criterion,
            },
        }
    }
}

impl From<DecisionError> for DomainError {
    fn from(err: DecisionError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            DecisionError::MissingValue {
                alternative,
                criterion,
            } => domain
                .with_detail("alternative", alternative)
                .with_detail("criterion", criterion),
            DecisionError::UnknownCriterion(name) => domain.with_detail("criterion", name),
            DecisionError::DataNotLoaded | DecisionError::NoAlternatives => domain,
        }
    }
}
