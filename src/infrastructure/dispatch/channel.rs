//! Channel dispatcher adapter
//!
//! Hands envelopes to the application's task handler over a bounded tokio
//! channel. `dispatch` resolves only once the envelope is queued for the
//! consumer, which is what keeps the wake guarantee: the record is in the
//! handler's hands before the posting context may be suspended.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::{DispatchEnvelope, DispatchError, TaskDispatcher};
use crate::domain::config::{BridgeConfig, DEFAULT_DISPATCH_CAPACITY};

/// Dispatcher backed by a bounded mpsc channel
pub struct ChannelDispatcher {
    sender: mpsc::Sender<DispatchEnvelope>,
}

impl ChannelDispatcher {
    /// Create a dispatcher with an explicit capacity, returning the
    /// consumer end for the task handler
    pub fn with_capacity(capacity: usize) -> (Self, mpsc::Receiver<DispatchEnvelope>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Create a dispatcher sized from config
    pub fn from_config(config: &BridgeConfig) -> (Self, mpsc::Receiver<DispatchEnvelope>) {
        let capacity = config.dispatch_capacity.unwrap_or(DEFAULT_DISPATCH_CAPACITY);
        Self::with_capacity(capacity)
    }
}

#[async_trait]
impl TaskDispatcher for ChannelDispatcher {
    async fn dispatch(&self, envelope: DispatchEnvelope) -> Result<(), DispatchError> {
        self.sender
            .send(envelope)
            .await
            .map_err(|e| DispatchError::HandlerUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(payload: &str) -> DispatchEnvelope {
        DispatchEnvelope {
            notification: payload.to_string(),
        }
    }

    #[tokio::test]
    async fn delivers_in_order() {
        let (dispatcher, mut receiver) = ChannelDispatcher::with_capacity(4);

        dispatcher.dispatch(envelope("first")).await.unwrap();
        dispatcher.dispatch(envelope("second")).await.unwrap();

        assert_eq!(receiver.recv().await.unwrap().notification, "first");
        assert_eq!(receiver.recv().await.unwrap().notification, "second");
    }

    #[tokio::test]
    async fn closed_receiver_reports_handler_unavailable() {
        let (dispatcher, receiver) = ChannelDispatcher::with_capacity(4);
        drop(receiver);

        let err = dispatcher.dispatch(envelope("lost")).await.unwrap_err();
        assert!(matches!(err, DispatchError::HandlerUnavailable(_)));
    }

    #[tokio::test]
    async fn capacity_comes_from_config() {
        let config = BridgeConfig {
            dispatch_capacity: Some(1),
            ..Default::default()
        };
        let (dispatcher, mut receiver) = ChannelDispatcher::from_config(&config);

        dispatcher.dispatch(envelope("fits")).await.unwrap();
        assert_eq!(receiver.recv().await.unwrap().notification, "fits");
    }
}
