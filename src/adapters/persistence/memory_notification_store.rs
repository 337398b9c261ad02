//! Implements NotificationStore in memory.

use crate::domain::{DomainError, NotificationId, NotificationRecord};
use crate::ports::NotificationStore;
use tokio::sync::RwLock;

/// In-memory notification store. Insertion order is the listing order.
#[derive(Default)]
pub struct MemoryNotificationStore {
    notifications: RwLock<Vec<NotificationRecord>>,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `notifications`.
    pub fn with_notifications(notifications: Vec<NotificationRecord>) -> Self {
        Self {
            notifications: RwLock::new(notifications),
        }
    }
}

#[async_trait::async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn list_notifications(&self) -> Result<Vec<NotificationRecord>, DomainError> {
        Ok(self.notifications.read().await.clone())
    }

    async fn push_notification(
        &self,
        notification: NotificationRecord,
    ) -> Result<(), DomainError> {
        self.notifications.write().await.push(notification);
        Ok(())
    }

    async fn mark_read(&self, id: &NotificationId) -> Result<bool, DomainError> {
        let mut notifications = self.notifications.write().await;
        match notifications.iter_mut().find(|n| &n.id == id) {
            Some(n) => {
                n.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self) -> Result<usize, DomainError> {
        let mut notifications = self.notifications.write().await;
        let mut flipped = 0;
        for n in notifications.iter_mut().filter(|n| !n.is_read) {
            n.is_read = true;
            flipped += 1;
        }
        Ok(flipped)
    }
}
