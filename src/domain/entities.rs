//! Domain entities. Pure data structures for the core business.
//!
//! No storage/UI types here. Adapters map into and out of these.

use crate::domain::expiry::{ExpiryClassifier, ExpiryStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Opaque process identifier. Assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(Uuid);

impl ProcessId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProcessId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Kind of environmental licensing process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessType {
    PriorLicense,
    InstallationLicense,
    OperationLicense,
    SingleLicense,
    Authorization,
    Exemption,
    Other,
}

impl ProcessType {
    pub const ALL: [ProcessType; 7] = [
        ProcessType::PriorLicense,
        ProcessType::InstallationLicense,
        ProcessType::OperationLicense,
        ProcessType::SingleLicense,
        ProcessType::Authorization,
        ProcessType::Exemption,
        ProcessType::Other,
    ];

    /// Stable machine code (matches the serde name).
    pub fn code(self) -> &'static str {
        match self {
            ProcessType::PriorLicense => "prior-license",
            ProcessType::InstallationLicense => "installation-license",
            ProcessType::OperationLicense => "operation-license",
            ProcessType::SingleLicense => "single-license",
            ProcessType::Authorization => "authorization",
            ProcessType::Exemption => "exemption",
            ProcessType::Other => "other",
        }
    }

    /// Human-readable label for lists and prompts.
    pub fn label(self) -> &'static str {
        match self {
            ProcessType::PriorLicense => "Prior License",
            ProcessType::InstallationLicense => "Installation License",
            ProcessType::OperationLicense => "Operation License",
            ProcessType::SingleLicense => "Single License",
            ProcessType::Authorization => "Authorization",
            ProcessType::Exemption => "Licensing Exemption",
            ProcessType::Other => "Other",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown process type code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown process type `{0}`")]
pub struct UnknownProcessType(pub String);

impl FromStr for ProcessType {
    type Err = UnknownProcessType;

    /// Accepts kebab-case codes, their snake_case spelling, and the legacy
    /// form codes (`licenca_previa`, `dispensa`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "prior-license" | "licenca-previa" => ProcessType::PriorLicense,
            "installation-license" | "licenca-instalacao" => ProcessType::InstallationLicense,
            "operation-license" | "licenca-operacao" => ProcessType::OperationLicense,
            "single-license" | "licenca-unica" => ProcessType::SingleLicense,
            "authorization" | "autorizacao" => ProcessType::Authorization,
            "exemption" | "dispensa" => ProcessType::Exemption,
            "other" | "outros" => ProcessType::Other,
            _ => return Err(UnknownProcessType(s.to_string())),
        };
        Ok(kind)
    }
}

/// Raw process payload as entered in a form. Everything is text; see
/// [`ProcessRecordInput::validate`] for the typed result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessRecordInput {
    pub process_number: String,
    /// `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub protocol_date: String,
    pub process_type: String,
    pub description: String,
    pub client_name: String,
    pub location: String,
    pub license_expiry_date: Option<String>,
    pub observations: Option<String>,
}

/// Validated process, ready to be stored. Produced only by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProcess {
    pub process_number: String,
    pub protocol_date: NaiveDate,
    pub process_type: ProcessType,
    pub description: String,
    pub client_name: String,
    pub location: String,
    pub license_expiry_date: Option<NaiveDate>,
    pub observations: Option<String>,
}

/// A stored licensing process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub process_number: String,
    pub protocol_date: NaiveDate,
    pub process_type: ProcessType,
    pub description: String,
    pub client_name: String,
    pub location: String,
    pub license_expiry_date: Option<NaiveDate>,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProcessRecord {
    /// Snapshot a validated process under a freshly assigned id.
    pub fn from_new(id: ProcessId, process: NewProcess, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            process_number: process.process_number,
            protocol_date: process.protocol_date,
            process_type: process.process_type,
            description: process.description,
            client_name: process.client_name,
            location: process.location,
            license_expiry_date: process.license_expiry_date,
            observations: process.observations,
            created_at,
        }
    }

    /// Derived license status with the default warning window.
    pub fn status(&self, now: DateTime<Utc>) -> ExpiryStatus {
        self.status_with(&ExpiryClassifier::default(), now)
    }

    pub fn status_with(&self, classifier: &ExpiryClassifier, now: DateTime<Utc>) -> ExpiryStatus {
        classifier.classify(self.license_expiry_date, now)
    }
}

/// Narrows a process listing. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessFilter {
    pub process_type: Option<ProcessType>,
    /// Case-insensitive substring over number, client, location and description.
    pub term: Option<String>,
}

impl ProcessFilter {
    pub fn by_type(process_type: ProcessType) -> Self {
        Self {
            process_type: Some(process_type),
            term: None,
        }
    }

    pub fn by_term(term: impl Into<String>) -> Self {
        Self {
            process_type: None,
            term: Some(term.into()),
        }
    }

    pub fn matches(&self, record: &ProcessRecord) -> bool {
        if let Some(kind) = self.process_type {
            if record.process_type != kind {
                return false;
            }
        }
        let term = match self.term.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };
        [
            &record.process_number,
            &record.client_name,
            &record.location,
            &record.description,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// A searchable document attached to a process (typically a PDF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub process_id: String,
    pub process_number: String,
    pub file_name: String,
    pub file_type: String,
    /// Relevance reported by the search backend. Not used for ordering.
    #[serde(default)]
    pub rank: f32,
    pub excerpt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    ExpiryWarning,
    RenewalNeeded,
    Expired,
}

/// An alert about a process license. Only `is_read` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub related_process_number: String,
}

impl NotificationRecord {
    /// New unread notification.
    pub fn unread(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        related_process_number: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            message: message.into(),
            is_read: false,
            created_at,
            related_process_number: related_process_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> ProcessRecord {
        ProcessRecord {
            id: ProcessId::new(),
            process_number: "LP-2024-001".to_string(),
            protocol_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            process_type: ProcessType::PriorLicense,
            description: "Food industry installation license".to_string(),
            client_name: "Empresa ABC Ltda".to_string(),
            location: "São Paulo, SP".to_string(),
            license_expiry_date: NaiveDate::from_ymd_opt(2024, 12, 15),
            observations: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_process_type_parses_codes_and_legacy_names() {
        assert_eq!(
            "installation-license".parse::<ProcessType>().unwrap(),
            ProcessType::InstallationLicense
        );
        assert_eq!(
            "single_license".parse::<ProcessType>().unwrap(),
            ProcessType::SingleLicense
        );
        assert_eq!(
            "licenca_previa".parse::<ProcessType>().unwrap(),
            ProcessType::PriorLicense
        );
        assert_eq!("Dispensa".parse::<ProcessType>().unwrap(), ProcessType::Exemption);
        let err = "mining-permit".parse::<ProcessType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown process type `mining-permit`");
    }

    #[test]
    fn test_process_type_code_round_trips_through_parser() {
        for kind in ProcessType::ALL {
            assert_eq!(kind.code().parse::<ProcessType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_process_type_serde_name_matches_code() {
        let json = serde_json::to_string(&ProcessType::OperationLicense).unwrap();
        assert_eq!(json, "\"operation-license\"");
    }

    #[test]
    fn test_status_uses_default_window() {
        let record = sample_record();
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 9, 0, 0).unwrap();
        assert_eq!(record.status(now), ExpiryStatus::ExpiringSoon);
        assert_eq!(
            record.status_with(&ExpiryClassifier::new(7), now),
            ExpiryStatus::Active
        );
    }

    #[test]
    fn test_filter_matches_type_and_term() {
        let record = sample_record();
        assert!(ProcessFilter::default().matches(&record));
        assert!(ProcessFilter::by_type(ProcessType::PriorLicense).matches(&record));
        assert!(!ProcessFilter::by_type(ProcessType::Exemption).matches(&record));
        assert!(ProcessFilter::by_term("abc").matches(&record));
        assert!(ProcessFilter::by_term("SÃO PAULO").matches(&record));
        assert!(ProcessFilter::by_term("   ").matches(&record));
        assert!(!ProcessFilter::by_term("Rio de Janeiro").matches(&record));
    }

    #[test]
    fn test_notification_unread_constructor() {
        let n = NotificationRecord::unread(
            NotificationKind::Expired,
            "License expired",
            "License LO-2023-010 expired",
            "LO-2023-010",
            Utc::now(),
        );
        assert!(!n.is_read);
        assert_eq!(n.related_process_number, "LO-2023-010");
    }
}
