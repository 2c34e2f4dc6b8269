//! Dispatch boundary port interface

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::notification::NotificationRecord;

/// Dispatch errors
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("Failed to serialize notification record: {0}")]
    Serialize(String),

    #[error("Task handler unavailable: {0}")]
    HandlerUnavailable(String),
}

/// Payload handed to the application's task handler: a single `notification`
/// field carrying the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEnvelope {
    pub notification: String,
}

impl DispatchEnvelope {
    /// Serialize a record into an envelope
    pub fn from_record(record: &NotificationRecord) -> Result<Self, DispatchError> {
        let notification = serde_json::to_string(record)
            .map_err(|e| DispatchError::Serialize(e.to_string()))?;

        Ok(Self { notification })
    }

    /// Parse the record back out (the consuming side of the boundary)
    pub fn record(&self) -> Result<NotificationRecord, DispatchError> {
        serde_json::from_str(&self.notification).map_err(|e| DispatchError::Serialize(e.to_string()))
    }
}

/// Port for handing records to the application's task handler
#[async_trait]
pub trait TaskDispatcher: Send + Sync {
    /// Deliver an envelope to the task handler.
    ///
    /// Implementations must guarantee the receiving task is scheduled before
    /// this resolves (wake assertion), so the record survives the host
    /// suspending the posting context. No ordering guarantee beyond the
    /// host's delivery order is implied.
    async fn dispatch(&self, envelope: DispatchEnvelope) -> Result<(), DispatchError>;
}

/// Blanket implementation for boxed dispatcher types
#[async_trait]
impl TaskDispatcher for Box<dyn TaskDispatcher> {
    async fn dispatch(&self, envelope: DispatchEnvelope) -> Result<(), DispatchError> {
        self.as_ref().dispatch(envelope).await
    }
}

/// Blanket implementation for shared dispatcher types
#[async_trait]
impl<T: TaskDispatcher> TaskDispatcher for Arc<T> {
    async fn dispatch(&self, envelope: DispatchEnvelope) -> Result<(), DispatchError> {
        self.as_ref().dispatch(envelope).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::domain::notification::WIRE_SCHEMA_VERSION;

    fn record() -> NotificationRecord {
        NotificationRecord {
            schema_version: WIRE_SCHEMA_VERSION,
            key: "0|com.chat.app|7".into(),
            app: "com.chat.app".into(),
            title: "Bob".into(),
            text: "ping".into(),
            time: DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap(),
            has_reply_action: false,
        }
    }

    #[test]
    fn envelope_round_trips_the_record() {
        let envelope = DispatchEnvelope::from_record(&record()).unwrap();
        assert_eq!(envelope.record().unwrap(), record());
    }

    #[test]
    fn envelope_has_a_single_notification_field() {
        let envelope = DispatchEnvelope::from_record(&record()).unwrap();
        let value: serde_json::Value = serde_json::to_value(&envelope).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["notification"].is_string());
    }
}
