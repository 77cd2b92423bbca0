//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Reasons the ontology document could not be loaded.
///
/// Every variant means the same thing to the caller: there is no data to work with.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{filename} not found: {}", path.display())]
    NotFound {
        filename: String,
        path: PathBuf,
        dir: PathBuf,
    },

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
