//! In-memory notification host
//!
//! Stands in for the platform's listener facility: the embedding shim (or a
//! test) seeds the active snapshot, and invoked replies are collected
//! instead of fired at a real pending handle.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{HostError, NotificationHost};
use crate::domain::notification::{ActionId, Notification, ReplyDispatch};

/// Host adapter holding the tray state in memory
#[derive(Default)]
pub struct InMemoryHost {
    active: Mutex<Vec<Notification>>,
    invoked: Mutex<Vec<ReplyDispatch>>,
    canceled: Mutex<HashSet<ActionId>>,
}

impl InMemoryHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the active snapshot
    pub async fn post(&self, notification: Notification) {
        self.active.lock().await.push(notification);
    }

    /// Dismiss a notification by key
    pub async fn remove(&self, key: &str) {
        self.active.lock().await.retain(|n| n.key != key);
    }

    /// Mark an action's pending handle as canceled, so invoking it fails
    pub async fn cancel_action(&self, id: ActionId) {
        self.canceled.lock().await.insert(id);
    }

    /// Replies invoked so far, in invocation order
    pub async fn invoked_replies(&self) -> Vec<ReplyDispatch> {
        self.invoked.lock().await.clone()
    }
}

#[async_trait]
impl NotificationHost for InMemoryHost {
    async fn active_notifications(&self) -> Result<Vec<Notification>, HostError> {
        Ok(self.active.lock().await.clone())
    }

    async fn invoke_reply(&self, dispatch: &ReplyDispatch) -> Result<(), HostError> {
        if self.canceled.lock().await.contains(&dispatch.action) {
            return Err(HostError::ActionCanceled(dispatch.action.to_string()));
        }

        self.invoked.lock().await.push(dispatch.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::domain::notification::ResultBundle;

    fn notification(key: &str) -> Notification {
        Notification {
            key: key.into(),
            package: "com.chat.app".into(),
            posted_at: DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap(),
            content: None,
            actions: vec![],
        }
    }

    #[tokio::test]
    async fn post_and_remove_update_the_snapshot() {
        let host = InMemoryHost::new();
        host.post(notification("k1")).await;
        host.post(notification("k2")).await;
        host.remove("k1").await;

        let active = host.active_notifications().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key, "k2");
    }

    #[tokio::test]
    async fn canceled_actions_fail_to_invoke() {
        let host = InMemoryHost::new();
        host.cancel_action(ActionId::new("reply")).await;

        let dispatch = ReplyDispatch {
            notification_key: "k1".into(),
            action: ActionId::new("reply"),
            results: ResultBundle::new(),
        };

        let err = host.invoke_reply(&dispatch).await.unwrap_err();
        assert!(matches!(err, HostError::ActionCanceled(_)));
        assert!(host.invoked_replies().await.is_empty());
    }
}
