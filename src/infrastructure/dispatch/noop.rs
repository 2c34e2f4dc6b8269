//! No-op dispatcher adapter

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{DispatchEnvelope, DispatchError, TaskDispatcher};

/// No-op dispatcher that drops every envelope
///
/// Used when the embedding runtime has not wired a task handler.
pub struct NoOpDispatcher;

impl NoOpDispatcher {
    /// Create a new no-op dispatcher
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskDispatcher for NoOpDispatcher {
    async fn dispatch(&self, _envelope: DispatchEnvelope) -> Result<(), DispatchError> {
        debug!("no task handler wired, dropping envelope");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_and_drops_envelopes() {
        let dispatcher = NoOpDispatcher::new();
        let envelope = DispatchEnvelope {
            notification: "{}".into(),
        };

        assert!(dispatcher.dispatch(envelope).await.is_ok());
    }
}
