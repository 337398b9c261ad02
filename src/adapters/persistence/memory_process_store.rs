//! Implements ProcessStore in memory.
//!
//! Session-scoped stand-in for the remote data service. Insertion order is the
//! listing order.

use crate::domain::{DomainError, NewProcess, ProcessFilter, ProcessId, ProcessRecord};
use crate::ports::ProcessStore;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory process store.
#[derive(Default)]
pub struct MemoryProcessStore {
    records: RwLock<Vec<ProcessRecord>>,
}

impl MemoryProcessStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored processes.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ProcessStore for MemoryProcessStore {
    async fn save_process(&self, process: NewProcess) -> Result<ProcessRecord, DomainError> {
        let record = ProcessRecord::from_new(ProcessId::new(), process, Utc::now());
        let mut records = self.records.write().await;
        records.push(record.clone());
        debug!(
            id = %record.id,
            process_number = %record.process_number,
            total = records.len(),
            "process stored in memory"
        );
        Ok(record)
    }

    async fn list_processes(
        &self,
        filter: Option<&ProcessFilter>,
    ) -> Result<Vec<ProcessRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(match filter {
            Some(f) => records.iter().filter(|r| f.matches(r)).cloned().collect(),
            None => records.clone(),
        })
    }
}
