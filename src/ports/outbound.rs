//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters: in-memory/mock ones for development and tests, a
//! remote data service in production.

use crate::domain::{
    Document, DomainError, NewProcess, NotificationId, NotificationRecord, ProcessFilter,
    ProcessRecord,
};

/// Process persistence. The store owns id assignment and ordering.
#[async_trait::async_trait]
pub trait ProcessStore: Send + Sync {
    /// Persist a validated process. Returns the stored record with its new id.
    /// Process number uniqueness is the store's concern.
    async fn save_process(&self, process: NewProcess) -> Result<ProcessRecord, DomainError>;

    /// All processes in insertion order, optionally narrowed by `filter`.
    async fn list_processes(
        &self,
        filter: Option<&ProcessFilter>,
    ) -> Result<Vec<ProcessRecord>, DomainError>;
}

/// Full-text document search over process attachments.
#[async_trait::async_trait]
pub trait DocumentSearchPort: Send + Sync {
    /// Documents matching a non-blank query. Order is backend-defined.
    async fn search_documents(&self, query: &str) -> Result<Vec<Document>, DomainError>;

    /// Raw file contents. Unknown id is `DomainError::NotFound`.
    async fn download_document(&self, document_id: &str) -> Result<Vec<u8>, DomainError>;
}

/// Notification persistence.
#[async_trait::async_trait]
pub trait NotificationStore: Send + Sync {
    /// All notifications in insertion order.
    async fn list_notifications(&self) -> Result<Vec<NotificationRecord>, DomainError>;

    async fn push_notification(&self, notification: NotificationRecord)
    -> Result<(), DomainError>;

    /// Flip `is_read` on one record. Returns false when `id` is unknown.
    async fn mark_read(&self, id: &NotificationId) -> Result<bool, DomainError>;

    /// Flip `is_read` on every record. Returns how many were unread.
    async fn mark_all_read(&self) -> Result<usize, DomainError>;
}
