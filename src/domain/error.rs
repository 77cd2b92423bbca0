//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the ontology's expected shape.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("missing required top-level key '{0}'")]
    MissingTopLevelKey(&'static str),

    #[error("required branch not found: {0}")]
    BranchNotFound(&'static str),

    #[error("malformed ontology node {path}: {reason}")]
    MalformedNode { path: String, reason: String },
}

impl DomainError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
