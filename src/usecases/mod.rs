//! Application use cases. Orchestrate domain logic via ports.

pub mod alert_service;
pub mod notification_service;
pub mod process_service;
pub mod search_service;

pub use alert_service::AlertService;
pub use notification_service::NotificationService;
pub use process_service::{ProcessOverview, ProcessService};
pub use search_service::SearchService;
