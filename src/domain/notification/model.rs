//! Platform notification model
//!
//! Mirrors the host's view of a notification: an opaque stable key, the
//! source package, optional displayable content, and the advertised actions.
//! The same shape appears in posted events and in the active-notification
//! snapshot.

use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque identifier the host assigns to a notification action.
///
/// The bridge never interprets it; it only hands it back to the host when
/// invoking the action's pending handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionId(String);

impl ActionId {
    /// Wrap a host-assigned action identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text input descriptor attached to a notification action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInput {
    /// Key under which the host expects the typed text in the result bundle
    pub result_key: String,
    /// Placeholder label the host shows for the input field, if any
    pub label: Option<String>,
}

impl RemoteInput {
    /// Create a remote input with only a result key
    pub fn new(result_key: impl Into<String>) -> Self {
        Self {
            result_key: result_key.into(),
            label: None,
        }
    }
}

/// An action a notification advertises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    /// Host-assigned identity, routed back on invoke
    pub id: ActionId,
    /// Action label as shown by the host
    pub title: String,
    /// Remote-input descriptors; non-empty means the action accepts a typed reply
    pub remote_inputs: Vec<RemoteInput>,
}

/// Displayable content of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub text: String,
}

impl NotificationContent {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A notification as the host presents it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Stable identifier assigned by the host
    pub key: String,
    /// Source application identifier
    pub package: String,
    /// When the host posted it
    pub posted_at: DateTime<Utc>,
    /// `None` when the event carried no payload data
    pub content: Option<NotificationContent>,
    /// Advertised actions, in host order
    pub actions: Vec<NotificationAction>,
}

/// Lifecycle events the host delivers to a registered observer.
#[derive(Debug, Clone)]
pub enum ListenerEvent {
    /// A notification was posted to the tray
    Posted(Notification),
    /// A notification left the tray; the observer contract requires
    /// accepting it, but no work is attached
    Removed { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_id_round_trips() {
        let id = ActionId::new("action-3");
        assert_eq!(id.as_str(), "action-3");
        assert_eq!(id.to_string(), "action-3");
    }

    #[test]
    fn remote_input_defaults_to_no_label() {
        let input = RemoteInput::new("quick_reply");
        assert_eq!(input.result_key, "quick_reply");
        assert!(input.label.is_none());
    }
}
