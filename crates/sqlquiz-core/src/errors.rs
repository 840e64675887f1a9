use thiserror::Error;

use crate::admission::AdmissionRejected;

/// Errors raised while handling one quiz action.
///
/// Mismatches and broken reference queries are not errors: they are reported
/// as [`crate::compare::Outcome::Incorrect`] and
/// [`crate::compare::Outcome::Unverifiable`] verdicts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("{0}")]
    AdmissionRejected(#[from] AdmissionRejected),

    /// The engine rejected an admitted query. Carries the raw engine message.
    #[error("SQL error: {0}")]
    QueryExecution(String),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Fixture setup failed: {0}")]
    Fixture(String),
}

impl QuizError {
    /// Stable machine-readable code, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            QuizError::AdmissionRejected(_) => "admission_rejected",
            QuizError::QueryExecution(_) => "query_execution_error",
            QuizError::UnknownQuestion(_) => "unknown_question",
            QuizError::Fixture(_) => "fixture_error",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config {path}: {detail}")]
    Read { path: String, detail: String },

    #[error("failed to parse YAML: {0}")]
    Parse(String),

    #[error("unsupported config version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid config: {0}")]
    Invalid(String),
}
