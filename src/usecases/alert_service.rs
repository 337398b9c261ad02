//! Expiry alerts: classify stored processes and raise notifications for
//! licenses that are expiring soon or already expired.
//!
//! Orchestrates ProcessService and NotificationStore. A (kind, process number)
//! pair is notified at most once, so repeated scans are harmless.

use crate::domain::{DomainError, ExpiryStatus, NotificationKind, NotificationRecord, days_until};
use crate::ports::NotificationStore;
use crate::usecases::process_service::{ProcessOverview, ProcessService};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Display format for dates inside notification messages.
const MESSAGE_DATE_FORMAT: &str = "%d/%m/%Y";

pub struct AlertService {
    processes: Arc<ProcessService>,
    notifications: Arc<dyn NotificationStore>,
}

impl AlertService {
    pub fn new(processes: Arc<ProcessService>, notifications: Arc<dyn NotificationStore>) -> Self {
        Self {
            processes,
            notifications,
        }
    }

    /// Scan all processes at `now`. Returns only notifications created by this scan.
    pub async fn scan(&self, now: DateTime<Utc>) -> Result<Vec<NotificationRecord>, DomainError> {
        let mut existing: HashSet<(NotificationKind, String)> = self
            .notifications
            .list_notifications()
            .await?
            .into_iter()
            .map(|n| (n.kind, n.related_process_number))
            .collect();

        let mut created = Vec::new();
        for overview in self.processes.overview(now).await? {
            let Some(notification) = alert_for(&overview, now) else {
                continue;
            };
            let key = (
                notification.kind,
                notification.related_process_number.clone(),
            );
            if !existing.insert(key) {
                continue;
            }
            self.notifications
                .push_notification(notification.clone())
                .await?;
            created.push(notification);
        }

        info!(created = created.len(), "expiry scan complete");
        Ok(created)
    }
}

/// Notification for a classified process, if its status warrants one.
fn alert_for(overview: &ProcessOverview, now: DateTime<Utc>) -> Option<NotificationRecord> {
    let record = &overview.record;
    let expiry = record.license_expiry_date?;
    let number = &record.process_number;
    let date = expiry.format(MESSAGE_DATE_FORMAT);
    match overview.status {
        ExpiryStatus::ExpiringSoon => {
            let days = days_until(expiry, now);
            let unit = if days == 1 { "day" } else { "days" };
            Some(NotificationRecord::unread(
                NotificationKind::ExpiryWarning,
                "License close to expiry",
                format!("License {number} expires in {days} {unit} ({date})"),
                number.clone(),
                now,
            ))
        }
        ExpiryStatus::Expired => Some(NotificationRecord::unread(
            NotificationKind::Expired,
            "License expired",
            format!("License {number} expired on {date}"),
            number.clone(),
            now,
        )),
        ExpiryStatus::Active | ExpiryStatus::NoExpiry => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::{MemoryNotificationStore, MemoryProcessStore};
    use crate::domain::{ExpiryClassifier, ProcessRecordInput};
    use chrono::TimeZone;

    fn input(number: &str, expiry: Option<&str>) -> ProcessRecordInput {
        ProcessRecordInput {
            process_number: number.to_string(),
            protocol_date: "2024-01-15".to_string(),
            process_type: "operation-license".to_string(),
            description: "Operation license for a ceramics kiln".to_string(),
            client_name: "Cerâmica Vale Verde".to_string(),
            location: "Belo Horizonte, MG".to_string(),
            license_expiry_date: expiry.map(String::from),
            observations: None,
        }
    }

    async fn setup() -> (AlertService, Arc<MemoryNotificationStore>) {
        let processes = Arc::new(ProcessService::new(
            Arc::new(MemoryProcessStore::new()),
            ExpiryClassifier::default(),
        ));
        processes
            .create(&input("LP-2024-001", Some("2024-12-15")))
            .await
            .unwrap();
        processes
            .create(&input("LI-2024-002", Some("2024-08-10")))
            .await
            .unwrap();
        processes
            .create(&input("LO-2025-003", Some("2027-03-31")))
            .await
            .unwrap();
        processes.create(&input("DL-2025-004", None)).await.unwrap();

        let notifications = Arc::new(MemoryNotificationStore::new());
        let alerts = AlertService::new(processes, notifications.clone());
        (alerts, notifications)
    }

    #[tokio::test]
    async fn test_scan_raises_warning_and_expired() {
        let (alerts, _) = setup().await;
        let now = Utc.with_ymd_and_hms(2024, 11, 30, 10, 0, 0).unwrap();
        let created = alerts.scan(now).await.unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].kind, NotificationKind::ExpiryWarning);
        assert_eq!(created[0].related_process_number, "LP-2024-001");
        assert_eq!(
            created[0].message,
            "License LP-2024-001 expires in 15 days (15/12/2024)"
        );
        assert_eq!(created[1].kind, NotificationKind::Expired);
        assert_eq!(created[1].message, "License LI-2024-002 expired on 10/08/2024");
        assert!(created.iter().all(|n| !n.is_read));
    }

    #[tokio::test]
    async fn test_scan_is_idempotent() {
        let (alerts, store) = setup().await;
        let now = Utc.with_ymd_and_hms(2024, 11, 30, 10, 0, 0).unwrap();
        alerts.scan(now).await.unwrap();
        assert!(alerts.scan(now).await.unwrap().is_empty());
        assert_eq!(store.list_notifications().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_shared_process_number_is_notified_once_per_scan() {
        let processes = Arc::new(ProcessService::new(
            Arc::new(MemoryProcessStore::new()),
            ExpiryClassifier::default(),
        ));
        for _ in 0..2 {
            processes
                .create(&input("LI-2024-002", Some("2024-08-10")))
                .await
                .unwrap();
        }
        let store = Arc::new(MemoryNotificationStore::new());
        let alerts = AlertService::new(processes, store.clone());

        let now = Utc.with_ymd_and_hms(2024, 11, 30, 10, 0, 0).unwrap();
        let created = alerts.scan(now).await.unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].kind, NotificationKind::Expired);
        assert_eq!(store.list_notifications().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_warning_then_expired_are_distinct() {
        let (alerts, store) = setup().await;
        let before = Utc.with_ymd_and_hms(2024, 11, 30, 10, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap();
        alerts.scan(before).await.unwrap();
        let created = alerts.scan(after).await.unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].kind, NotificationKind::Expired);
        assert_eq!(created[0].related_process_number, "LP-2024-001");
        assert_eq!(store.list_notifications().await.unwrap().len(), 3);
    }
}
