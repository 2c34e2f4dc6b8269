//! Listener permission port interface

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Permission errors
#[derive(Debug, Clone, Error)]
pub enum PermissionError {
    #[error("No application context attached")]
    ContextUnavailable,

    #[error("Failed to query listener grants: {0}")]
    QueryFailed(String),

    #[error("Failed to open listener settings: {0}")]
    SettingsNavigationFailed(String),
}

/// Port for the host's listener-access grant state
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Packages the host has granted notification-listener access.
    async fn enabled_listener_packages(&self) -> Result<HashSet<String>, PermissionError>;

    /// Navigate to the host's listener-access settings screen.
    ///
    /// Fire-and-forget: success means the navigation was issued, not that
    /// the user granted anything.
    async fn open_listener_settings(&self) -> Result<(), PermissionError>;
}

/// Blanket implementation for boxed gate types
#[async_trait]
impl PermissionGate for Box<dyn PermissionGate> {
    async fn enabled_listener_packages(&self) -> Result<HashSet<String>, PermissionError> {
        self.as_ref().enabled_listener_packages().await
    }

    async fn open_listener_settings(&self) -> Result<(), PermissionError> {
        self.as_ref().open_listener_settings().await
    }
}

/// Blanket implementation for shared gate types
#[async_trait]
impl<T: PermissionGate> PermissionGate for Arc<T> {
    async fn enabled_listener_packages(&self) -> Result<HashSet<String>, PermissionError> {
        self.as_ref().enabled_listener_packages().await
    }

    async fn open_listener_settings(&self) -> Result<(), PermissionError> {
        self.as_ref().open_listener_settings().await
    }
}
