//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod dispatch;
pub mod host;
pub mod permissions;

// Re-export common types
pub use config::ConfigStore;
pub use dispatch::{DispatchEnvelope, DispatchError, TaskDispatcher};
pub use host::{HostError, NotificationHost};
pub use permissions::{PermissionError, PermissionGate};
