//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod expiry;
pub mod search;
pub mod validation;

pub use entities::{
    Document, NewProcess, NotificationId, NotificationKind, NotificationRecord, ProcessFilter,
    ProcessId, ProcessRecord, ProcessRecordInput, ProcessType,
};
pub use errors::DomainError;
pub use expiry::{ExpiryClassifier, ExpiryStatus, classify, days_until};
pub use search::{normalize_query, search};
pub use validation::{MIN_DESCRIPTION_CHARS, ProcessField};
