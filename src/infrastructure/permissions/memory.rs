//! In-memory permission gate
//!
//! Holds the host's grant state in memory. A gate built with
//! [`InMemoryPermissionGate::unavailable`] models a surface with no attached
//! application context.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{PermissionError, PermissionGate};

/// Permission gate holding the enabled-listener set in memory
pub struct InMemoryPermissionGate {
    /// `None` models a missing application context
    enabled: Option<HashSet<String>>,
    navigations: AtomicUsize,
}

impl InMemoryPermissionGate {
    /// Create a gate with the given enabled-listener set
    pub fn with_enabled<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: Some(packages.into_iter().map(Into::into).collect()),
            navigations: AtomicUsize::new(0),
        }
    }

    /// Create a gate with no attached application context
    pub fn unavailable() -> Self {
        Self {
            enabled: None,
            navigations: AtomicUsize::new(0),
        }
    }

    /// How many times the settings screen was requested
    pub fn navigation_count(&self) -> usize {
        self.navigations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionGate for InMemoryPermissionGate {
    async fn enabled_listener_packages(&self) -> Result<HashSet<String>, PermissionError> {
        self.enabled
            .clone()
            .ok_or(PermissionError::ContextUnavailable)
    }

    async fn open_listener_settings(&self) -> Result<(), PermissionError> {
        if self.enabled.is_none() {
            return Err(PermissionError::ContextUnavailable);
        }

        self.navigations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_the_seeded_set() {
        let gate = InMemoryPermissionGate::with_enabled(["com.example.app"]);
        let enabled = gate.enabled_listener_packages().await.unwrap();
        assert!(enabled.contains("com.example.app"));
    }

    #[tokio::test]
    async fn unavailable_gate_has_no_context() {
        let gate = InMemoryPermissionGate::unavailable();

        let err = gate.enabled_listener_packages().await.unwrap_err();
        assert!(matches!(err, PermissionError::ContextUnavailable));

        let err = gate.open_listener_settings().await.unwrap_err();
        assert!(matches!(err, PermissionError::ContextUnavailable));
    }

    #[tokio::test]
    async fn counts_settings_navigations() {
        let gate = InMemoryPermissionGate::with_enabled(["com.example.app"]);
        gate.open_listener_settings().await.unwrap();
        gate.open_listener_settings().await.unwrap();
        assert_eq!(gate.navigation_count(), 2);
    }
}
