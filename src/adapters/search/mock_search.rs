//! Mock document search for development without a search backend.
//!
//! Filters a fixed document set with the domain search filter and simulates
//! backend latency.

use crate::domain::{self, Document, DomainError};
use crate::ports::DocumentSearchPort;
use std::time::Duration;
use tracing::info;

/// Mock search adapter over an in-memory document set.
pub struct MockDocumentSearch {
    documents: Vec<Document>,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockDocumentSearch {
    /// Create a mock over `documents` with a simulated delay.
    pub fn with_delay(documents: Vec<Document>, delay_ms: u64) -> Self {
        Self {
            documents,
            delay_ms,
        }
    }
}

#[async_trait::async_trait]
impl DocumentSearchPort for MockDocumentSearch {
    async fn search_documents(&self, query: &str) -> Result<Vec<Document>, DomainError> {
        info!(
            query,
            candidates = self.documents.len(),
            "[MOCK] Simulating document search"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        domain::search(query, &self.documents)
    }

    async fn download_document(&self, document_id: &str) -> Result<Vec<u8>, DomainError> {
        let doc = self
            .documents
            .iter()
            .find(|d| d.id == document_id)
            .ok_or_else(|| DomainError::NotFound(format!("document {document_id}")))?;
        info!(document_id, file_name = %doc.file_name, "[MOCK] Simulating download");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        // Minimal placeholder body; a real backend streams the stored file.
        let body = format!(
            "%PDF-1.4\n% {} ({})\n% {}\n%%EOF\n",
            doc.file_name, doc.process_number, doc.excerpt
        );
        Ok(body.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documents() -> Vec<Document> {
        vec![
            Document {
                id: "doc1".to_string(),
                process_id: "proc1".to_string(),
                process_number: "LP-2024-001".to_string(),
                file_name: "relatorio_ambiental.pdf".to_string(),
                file_type: "pdf".to_string(),
                rank: 0.95,
                excerpt: "...air quality analysis under CONAMA resolution 491/2018...".to_string(),
            },
            Document {
                id: "doc2".to_string(),
                process_id: "proc2".to_string(),
                process_number: "LI-2024-002".to_string(),
                file_name: "estudo_impacto.pdf".to_string(),
                file_type: "pdf".to_string(),
                rank: 0.87,
                excerpt: "...assessment of potential environmental impacts...".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_mock_search_filters() {
        let adapter = MockDocumentSearch::with_delay(documents(), 0);
        let found = adapter.search_documents("Conama").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "doc1");

        let found = adapter.search_documents("pdf").await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_download() {
        let adapter = MockDocumentSearch::with_delay(documents(), 0);
        let bytes = adapter.download_document("doc2").await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let err = adapter.download_document("missing").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
