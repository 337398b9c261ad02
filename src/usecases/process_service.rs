//! Process repository use case: validate -> store -> list with derived status.
//!
//! - Validation happens before the store is touched, so a rejected create
//!   leaves the collection unchanged
//! - Listing order is the store's insertion order
//! - Status is derived on read from the configured classifier

use crate::domain::{
    DomainError, ExpiryClassifier, ExpiryStatus, ProcessFilter, ProcessRecord,
    ProcessRecordInput,
};
use crate::ports::ProcessStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// A process together with its status at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOverview {
    pub record: ProcessRecord,
    pub status: ExpiryStatus,
}

/// Process service. Owns the store handle and the expiry classifier.
pub struct ProcessService {
    store: Arc<dyn ProcessStore>,
    classifier: ExpiryClassifier,
}

impl ProcessService {
    pub fn new(store: Arc<dyn ProcessStore>, classifier: ExpiryClassifier) -> Self {
        Self { store, classifier }
    }

    pub fn classifier(&self) -> &ExpiryClassifier {
        &self.classifier
    }

    /// Validate and store a new process.
    pub async fn create(&self, input: &ProcessRecordInput) -> Result<ProcessRecord, DomainError> {
        let process = input.validate().inspect_err(|e| {
            warn!(
                process_number = %input.process_number,
                field = ?e.field().map(|f| f.name()),
                "process rejected: {}", e
            );
        })?;

        if let Some(expiry) = process.license_expiry_date {
            if expiry < process.protocol_date {
                warn!(
                    process_number = %process.process_number,
                    %expiry,
                    protocol_date = %process.protocol_date,
                    "license expiry precedes protocol date"
                );
            }
        }

        let record = self.store.save_process(process).await?;
        info!(
            id = %record.id,
            process_number = %record.process_number,
            process_type = record.process_type.code(),
            "process created"
        );
        Ok(record)
    }

    /// All processes in insertion order.
    pub async fn list(&self) -> Result<Vec<ProcessRecord>, DomainError> {
        self.store.list_processes(None).await
    }

    pub async fn list_filtered(
        &self,
        filter: &ProcessFilter,
    ) -> Result<Vec<ProcessRecord>, DomainError> {
        self.store.list_processes(Some(filter)).await
    }

    /// Every process paired with its status at `now`.
    pub async fn overview(&self, now: DateTime<Utc>) -> Result<Vec<ProcessOverview>, DomainError> {
        let records = self.list().await?;
        Ok(records
            .into_iter()
            .map(|record| {
                let status = record.status_with(&self.classifier, now);
                ProcessOverview { record, status }
            })
            .collect())
    }
}
