//! Embedded sample data: the dashboard's demo processes, documents and
//! notifications. Used when `seed_sample_data` is enabled.

use crate::domain::{
    Document, DomainError, NotificationId, NotificationKind, NotificationRecord,
    ProcessRecordInput,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const SAMPLE_DATA_JSON: &str = include_str!("sample_data.json");

#[derive(Debug, Clone, Deserialize)]
struct SampleNotification {
    kind: NotificationKind,
    title: String,
    message: String,
    #[serde(default)]
    is_read: bool,
    created_at: DateTime<Utc>,
    process_number: String,
}

impl From<SampleNotification> for NotificationRecord {
    fn from(s: SampleNotification) -> Self {
        NotificationRecord {
            id: NotificationId::new(),
            kind: s.kind,
            title: s.title,
            message: s.message,
            is_read: s.is_read,
            created_at: s.created_at,
            related_process_number: s.process_number,
        }
    }
}

/// Parsed sample set. Processes stay raw so they go through validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleData {
    pub processes: Vec<ProcessRecordInput>,
    pub documents: Vec<Document>,
    notifications: Vec<SampleNotification>,
}

impl SampleData {
    /// Parse the sample set compiled into the binary.
    pub fn embedded() -> Result<Self, DomainError> {
        Self::from_json(SAMPLE_DATA_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::Store(format!("invalid sample data: {e}")))
    }

    /// Notification records with fresh ids.
    pub fn notifications(&self) -> Vec<NotificationRecord> {
        self.notifications.iter().cloned().map(Into::into).collect()
    }
}
