//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::BridgeConfig;
pub use error::*;
pub use notification::{
    ListenerEvent, Notification, NotificationRecord, NotificationSummary, PermissionStatus,
    ReplyRequest,
};
