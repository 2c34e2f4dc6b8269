//! Notification host port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{Notification, ReplyDispatch};

/// Host errors
#[derive(Debug, Clone, Error)]
pub enum HostError {
    #[error("Notification host unavailable: {0}")]
    Unavailable(String),

    #[error("The action's pending handle was canceled: {0}")]
    ActionCanceled(String),

    #[error("Failed to invoke action: {0}")]
    InvokeFailed(String),
}

/// Port for the platform's notification-listener facility
#[async_trait]
pub trait NotificationHost: Send + Sync {
    /// Snapshot of the notifications currently active in the host's tray.
    ///
    /// # Returns
    /// Notifications in the host's native iteration order
    async fn active_notifications(&self) -> Result<Vec<Notification>, HostError>;

    /// Invoke a reply action's pending handle with the result bundle attached.
    ///
    /// # Arguments
    /// * `dispatch` - The resolved target, action, and result bundle
    async fn invoke_reply(&self, dispatch: &ReplyDispatch) -> Result<(), HostError>;
}

/// Blanket implementation for boxed host types
#[async_trait]
impl NotificationHost for Box<dyn NotificationHost> {
    async fn active_notifications(&self) -> Result<Vec<Notification>, HostError> {
        self.as_ref().active_notifications().await
    }

    async fn invoke_reply(&self, dispatch: &ReplyDispatch) -> Result<(), HostError> {
        self.as_ref().invoke_reply(dispatch).await
    }
}

/// Blanket implementation for shared host types
#[async_trait]
impl<T: NotificationHost> NotificationHost for Arc<T> {
    async fn active_notifications(&self) -> Result<Vec<Notification>, HostError> {
        self.as_ref().active_notifications().await
    }

    async fn invoke_reply(&self, dispatch: &ReplyDispatch) -> Result<(), HostError> {
        self.as_ref().invoke_reply(dispatch).await
    }
}
