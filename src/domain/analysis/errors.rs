//! Analysis error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the ranking procedures.
///
/// Judgment inconsistency is deliberately absent: it is reported on the
/// AHP result, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No alternatives provided for TOPSIS analysis")]
    NoAlternatives,

    #[error("Missing value for criterion '{criterion}' in alternative '{alternative}'")]
    MissingValue {
        alternative: String,
        criterion: String,
    },
}

impl AnalysisError {
    pub fn missing_value(alternative: impl Into<String>, criterion: impl Into<String>) -> Self {
        AnalysisError::MissingValue {
            alternative: alternative.into(),
            criterion: criterion.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::NoAlternatives => ErrorCode::NoAlternatives,
            AnalysisError::MissingValue { .. } => ErrorCode::MissingValue,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            AnalysisError::MissingValue {
                alternative,
                criterion,
            } => domain
                .with_detail("alternative", alternative)
                .with_detail("criterion", criterion),
            AnalysisError::NoAlternatives => domain,
        }
    }
}
