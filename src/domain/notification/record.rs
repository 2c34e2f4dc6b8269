//! Wire record forwarded across the dispatch boundary
//!
//! One fixed, versioned schema. The embedding runtime parses the serialized
//! record back out of the envelope's single `notification` field; field names
//! are camelCase and the post time travels as epoch milliseconds.

use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Notification;
use super::reply::has_reply_action;

/// Version stamped into every forwarded record.
pub const WIRE_SCHEMA_VERSION: u32 = 1;

/// Serialized form of a posted notification.
///
/// Built per posted event, forwarded, and discarded; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub schema_version: u32,
    /// Stable identifier assigned by the host, used later to address a reply
    pub key: String,
    /// Source application identifier
    pub app: String,
    pub title: String,
    pub text: String,
    /// Post time, epoch milliseconds
    #[serde(with = "ts_milliseconds")]
    pub time: DateTime<Utc>,
    /// True iff at least one action carries a remote-input descriptor
    pub has_reply_action: bool,
}

impl NotificationRecord {
    /// Build a record from a posted notification.
    ///
    /// Returns `None` when the notification carries no content; such events
    /// are dropped, not forwarded.
    pub fn from_notification(notification: &Notification) -> Option<Self> {
        let content = notification.content.as_ref()?;

        Some(Self {
            schema_version: WIRE_SCHEMA_VERSION,
            key: notification.key.clone(),
            app: notification.package.clone(),
            title: content.title.clone(),
            text: content.text.clone(),
            time: notification.posted_at,
            has_reply_action: has_reply_action(&notification.actions),
        })
    }
}

/// Summary returned by the reply-capable listing.
///
/// Unlike [`NotificationRecord`], a summary is produced for content-less
/// notifications too: the listing filters on actions, not content, so title
/// and text fall back to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    pub key: String,
    pub app: String,
    pub title: String,
    pub text: String,
    /// Post time, epoch milliseconds
    #[serde(with = "ts_milliseconds")]
    pub time: DateTime<Utc>,
}

impl NotificationSummary {
    /// Summarize an active notification
    pub fn from_notification(notification: &Notification) -> Self {
        let (title, text) = match &notification.content {
            Some(content) => (content.title.clone(), content.text.clone()),
            None => (String::new(), String::new()),
        };

        Self {
            key: notification.key.clone(),
            app: notification.package.clone(),
            title,
            text,
            time: notification.posted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::domain::notification::{
        ActionId, NotificationAction, NotificationContent, RemoteInput,
    };

    fn posted_at() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    fn message_notification() -> Notification {
        Notification {
            key: "0|com.chat.app|42".into(),
            package: "com.chat.app".into(),
            posted_at: posted_at(),
            content: Some(NotificationContent::new("Alice", "See you at 5?")),
            actions: vec![
                NotificationAction {
                    id: ActionId::new("open"),
                    title: "Open".into(),
                    remote_inputs: vec![],
                },
                NotificationAction {
                    id: ActionId::new("reply"),
                    title: "Reply".into(),
                    remote_inputs: vec![RemoteInput::new("key_text_reply")],
                },
            ],
        }
    }

    #[test]
    fn record_from_notification_fills_every_field() {
        let record = NotificationRecord::from_notification(&message_notification()).unwrap();

        assert_eq!(record.schema_version, WIRE_SCHEMA_VERSION);
        assert_eq!(record.key, "0|com.chat.app|42");
        assert_eq!(record.app, "com.chat.app");
        assert_eq!(record.title, "Alice");
        assert_eq!(record.text, "See you at 5?");
        assert_eq!(record.time, posted_at());
        assert!(record.has_reply_action);
    }

    #[test]
    fn record_is_none_without_content() {
        let notification = Notification {
            content: None,
            ..message_notification()
        };

        assert!(NotificationRecord::from_notification(&notification).is_none());
    }

    #[test]
    fn record_serializes_with_stable_camel_case_schema() {
        let record = NotificationRecord::from_notification(&message_notification()).unwrap();
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["schemaVersion"], 1);
        assert_eq!(value["key"], "0|com.chat.app|42");
        assert_eq!(value["app"], "com.chat.app");
        assert_eq!(value["title"], "Alice");
        assert_eq!(value["text"], "See you at 5?");
        assert_eq!(value["time"], 1_700_000_000_000_i64);
        assert_eq!(value["hasReplyAction"], true);
    }

    #[test]
    fn summary_falls_back_to_empty_strings_without_content() {
        let notification = Notification {
            content: None,
            ..message_notification()
        };

        let summary = NotificationSummary::from_notification(&notification);
        assert_eq!(summary.key, "0|com.chat.app|42");
        assert_eq!(summary.title, "");
        assert_eq!(summary.text, "");
        assert_eq!(summary.time, posted_at());
    }
}
