//! Listener observer use case
//!
//! Bridges host notification lifecycle events to the application: posted
//! events become wire records pushed across the dispatch boundary, and reply
//! requests are resolved against the host's live snapshot and fired through
//! the matched action's pending handle.

use tracing::{debug, error};

use crate::domain::error::ReplyError;
use crate::domain::notification::{
    has_reply_action, resolve_reply, ListenerEvent, Notification, NotificationRecord,
    NotificationSummary, ReplyRequest,
};

use super::ports::{DispatchEnvelope, NotificationHost, TaskDispatcher};

/// Observer registered with the host for notification lifecycle events.
pub struct ListenerObserver<H, D>
where
    H: NotificationHost,
    D: TaskDispatcher,
{
    host: H,
    dispatcher: D,
}

impl<H, D> ListenerObserver<H, D>
where
    H: NotificationHost,
    D: TaskDispatcher,
{
    /// Create a new observer over a host and a dispatch boundary
    pub fn new(host: H, dispatcher: D) -> Self {
        Self { host, dispatcher }
    }

    /// Handle a lifecycle event delivered by the host.
    ///
    /// Failures never propagate back to the host; they are logged and the
    /// event is dropped.
    pub async fn handle_event(&self, event: ListenerEvent) {
        match event {
            ListenerEvent::Posted(notification) => self.on_posted(notification).await,
            // Required by the observer contract, carries no work.
            ListenerEvent::Removed { .. } => {}
        }
    }

    async fn on_posted(&self, notification: Notification) {
        let Some(record) = NotificationRecord::from_notification(&notification) else {
            debug!(key = %notification.key, "posted notification has no content, dropping");
            return;
        };

        let envelope = match DispatchEnvelope::from_record(&record) {
            Ok(envelope) => envelope,
            Err(e) => {
                error!(key = %record.key, error = %e, "failed to serialize notification record");
                return;
            }
        };

        if let Err(e) = self.dispatcher.dispatch(envelope).await {
            error!(key = %record.key, error = %e, "failed to dispatch notification record");
        }
    }

    /// Send a scripted reply through a notification's existing reply action.
    ///
    /// Re-scans the active snapshot on every call; a dismissed or expired
    /// notification resolves to `NotificationNotFound`.
    pub async fn reply(&self, request: &ReplyRequest) -> Result<(), ReplyError> {
        let active = self
            .host
            .active_notifications()
            .await
            .map_err(|e| ReplyError::Host(e.to_string()))?;

        let dispatch = resolve_reply(&active, request)?;

        self.host
            .invoke_reply(&dispatch)
            .await
            .map_err(|e| ReplyError::Dispatch(e.to_string()))?;

        debug!(key = %request.key, "reply sent");
        Ok(())
    }

    /// Active notifications carrying at least one reply-capable action,
    /// in the host's iteration order.
    pub async fn notifications_with_reply_action(
        &self,
    ) -> Result<Vec<NotificationSummary>, ReplyError> {
        let active = self
            .host
            .active_notifications()
            .await
            .map_err(|e| ReplyError::Host(e.to_string()))?;

        Ok(active
            .iter()
            .filter(|n| has_reply_action(&n.actions))
            .map(NotificationSummary::from_notification)
            .collect())
    }
}
