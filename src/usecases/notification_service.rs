//! Notification acknowledgement use case.
//!
//! Read state only moves unread -> read. Unknown ids are ignored.

use crate::domain::{DomainError, NotificationId, NotificationRecord};
use crate::ports::NotificationStore;
use std::sync::Arc;
use tracing::{debug, info};

pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// All notifications in insertion order.
    pub async fn list(&self) -> Result<Vec<NotificationRecord>, DomainError> {
        self.store.list_notifications().await
    }

    /// Mark one notification read. No-op when `id` is unknown.
    pub async fn mark_read(&self, id: &NotificationId) -> Result<(), DomainError> {
        if self.store.mark_read(id).await? {
            debug!(%id, "notification marked read");
        } else {
            debug!(%id, "mark_read on unknown notification ignored");
        }
        Ok(())
    }

    pub async fn mark_all_read(&self) -> Result<(), DomainError> {
        let flipped = self.store.mark_all_read().await?;
        info!(flipped, "all notifications marked read");
        Ok(())
    }

    pub async fn unread_count(&self) -> Result<usize, DomainError> {
        Ok(self
            .store
            .list_notifications()
            .await?
            .iter()
            .filter(|n| !n.is_read)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::MemoryNotificationStore;
    use crate::domain::NotificationKind;
    use chrono::Utc;

    fn note(number: &str, is_read: bool) -> NotificationRecord {
        let mut n = NotificationRecord::unread(
            NotificationKind::RenewalNeeded,
            "Renewal required",
            format!("License {number} must be renewed"),
            number,
            Utc::now(),
        );
        n.is_read = is_read;
        n
    }

    fn service(notes: Vec<NotificationRecord>) -> NotificationService {
        NotificationService::new(Arc::new(MemoryNotificationStore::with_notifications(notes)))
    }

    #[tokio::test]
    async fn test_unread_count_and_mark_read() {
        let first = note("LP-1", false);
        let svc = service(vec![first.clone(), note("LI-2", false), note("LO-3", true)]);
        assert_eq!(svc.unread_count().await.unwrap(), 2);

        svc.mark_read(&first.id).await.unwrap();
        assert_eq!(svc.unread_count().await.unwrap(), 1);

        // Idempotent.
        svc.mark_read(&first.id).await.unwrap();
        assert_eq!(svc.unread_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mark_read_unknown_is_noop() {
        let svc = service(vec![note("LP-1", false)]);
        svc.mark_read(&NotificationId::new()).await.unwrap();
        assert_eq!(svc.unread_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_read_zeroes_unread() {
        for notes in [
            vec![],
            vec![note("LP-1", true)],
            vec![note("LP-1", false), note("LI-2", false), note("LO-3", true)],
        ] {
            let svc = service(notes);
            svc.mark_all_read().await.unwrap();
            assert_eq!(svc.unread_count().await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_list_keeps_order() {
        let a = note("A", false);
        let b = note("B", true);
        let svc = service(vec![a.clone(), b.clone()]);
        assert_eq!(svc.list().await.unwrap(), vec![a, b]);
    }
}
