//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use crate::domain::validation::ProcessField;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed form field. Names the first offending field.
    #[error("Invalid {field}: {reason}")]
    Validation { field: ProcessField, reason: String },

    #[error("Search term is required")]
    InvalidQuery,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Process store error: {0}")]
    Store(String),

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    /// The offending field for validation errors.
    pub fn field(&self) -> Option<ProcessField> {
        match self {
            DomainError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
