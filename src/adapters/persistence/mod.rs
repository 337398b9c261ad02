//! Persistence adapters. Session-scoped in-memory stores.

pub mod memory_notification_store;
pub mod memory_process_store;

pub use memory_notification_store::MemoryNotificationStore;
pub use memory_process_store::MemoryProcessStore;
