//! Control surface use case
//!
//! The only surface area the embedding application talks to directly. It
//! holds an externally supplied handle to the currently running observer
//! rather than reaching into global state; absence is an explicit empty slot.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::error::ReplyError;
use crate::domain::notification::{NotificationSummary, PermissionStatus, ReplyRequest};

use super::observer::ListenerObserver;
use super::ports::{NotificationHost, PermissionError, PermissionGate, TaskDispatcher};

/// Shared handle to the currently running observer, if any.
///
/// The embedding runtime fills the slot when the listener service starts
/// and clears it when the service stops.
pub type ObserverSlot<H, D> = Arc<RwLock<Option<Arc<ListenerObserver<H, D>>>>>;

/// Create an empty observer slot
pub fn empty_observer_slot<H, D>() -> ObserverSlot<H, D>
where
    H: NotificationHost,
    D: TaskDispatcher,
{
    Arc::new(RwLock::new(None))
}

/// Application-facing entry point for permission state and replies.
pub struct ControlSurface<H, D, P>
where
    H: NotificationHost,
    D: TaskDispatcher,
    P: PermissionGate,
{
    package_name: String,
    gate: P,
    observer: ObserverSlot<H, D>,
}

impl<H, D, P> ControlSurface<H, D, P>
where
    H: NotificationHost,
    D: TaskDispatcher,
    P: PermissionGate,
{
    /// Create a control surface for the given package identity
    pub fn new(package_name: impl Into<String>, gate: P, observer: ObserverSlot<H, D>) -> Self {
        Self {
            package_name: package_name.into(),
            gate,
            observer,
        }
    }

    /// Grant state of the listener capability for the current package.
    ///
    /// `Unknown` when no application context is attached; otherwise
    /// `Authorized` iff the current package appears in the host's
    /// enabled-listener set.
    pub async fn permission_status(&self) -> PermissionStatus {
        match self.gate.enabled_listener_packages().await {
            Ok(enabled) if enabled.contains(&self.package_name) => PermissionStatus::Authorized,
            Ok(_) => PermissionStatus::Denied,
            Err(PermissionError::ContextUnavailable) => PermissionStatus::Unknown,
            Err(e) => {
                warn!(error = %e, "failed to query enabled listener packages");
                PermissionStatus::Unknown
            }
        }
    }

    /// Navigate to the host's listener-access settings screen.
    ///
    /// Fire-and-forget: a successful return means the navigation was issued,
    /// not that the user granted anything. No completion signal follows.
    pub async fn request_permission(&self) -> Result<(), PermissionError> {
        self.gate.open_listener_settings().await
    }

    /// Reply to an active notification by key (optionally constrained by
    /// source package).
    pub async fn reply_to_notification(&self, request: &ReplyRequest) -> Result<(), ReplyError> {
        let guard = self.observer.read().await;
        let observer = guard.as_ref().ok_or(ReplyError::ServiceNotRunning)?;
        observer.reply(request).await
    }

    /// Summaries of active notifications that can take a reply, in the
    /// host's iteration order.
    pub async fn notifications_with_reply_action(
        &self,
    ) -> Result<Vec<NotificationSummary>, ReplyError> {
        let guard = self.observer.read().await;
        let observer = guard.as_ref().ok_or(ReplyError::ServiceNotRunning)?;
        observer.notifications_with_reply_action().await
    }
}
