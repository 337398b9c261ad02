//! Document search use case. Rejects blank queries before hitting the backend.

use crate::domain::{Document, DomainError};
use crate::ports::DocumentSearchPort;
use std::sync::Arc;
use tracing::info;

/// Search service over a [`DocumentSearchPort`].
pub struct SearchService {
    port: Arc<dyn DocumentSearchPort>,
}

impl SearchService {
    pub fn new(port: Arc<dyn DocumentSearchPort>) -> Self {
        Self { port }
    }

    /// Search documents. Blank queries fail with `DomainError::InvalidQuery`.
    pub async fn search(&self, query: &str) -> Result<Vec<Document>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::InvalidQuery);
        }
        let results = self.port.search_documents(query).await?;
        info!(query, results = results.len(), "document search");
        Ok(results)
    }

    /// Fetch a document body by id.
    pub async fn download(&self, document_id: &str) -> Result<Vec<u8>, DomainError> {
        let bytes = self.port.download_document(document_id).await?;
        info!(document_id, bytes = bytes.len(), "document downloaded");
        Ok(bytes)
    }
}
