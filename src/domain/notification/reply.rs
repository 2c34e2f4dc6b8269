//! Reply resolution over the active-notification snapshot
//!
//! Pure lookups: find the target by key (and package when supplied), pick the
//! first action carrying remote inputs, and fan the reply text out to every
//! result key of that action. Nothing is cached; every invocation re-scans,
//! so a dismissed or expired notification simply fails to resolve.

use std::collections::BTreeMap;

use crate::domain::error::ReplyError;

use super::model::{ActionId, Notification, NotificationAction};

/// Result bundle handed to the host when invoking a reply action,
/// mapping each remote-input result key to the reply text.
pub type ResultBundle = BTreeMap<String, String>;

/// A reply request from the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRequest {
    /// Key of the notification to reply to
    pub key: String,
    /// Optional source-package constraint
    pub package: Option<String>,
    /// Text to submit through the reply action
    pub text: String,
}

impl ReplyRequest {
    /// Request a reply addressed by key alone
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            package: None,
            text: text.into(),
        }
    }

    /// Request a reply additionally constrained by source package
    pub fn for_package(
        key: impl Into<String>,
        package: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            package: Some(package.into()),
            text: text.into(),
        }
    }
}

/// A resolved reply, ready for the host to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDispatch {
    /// Key of the matched notification
    pub notification_key: String,
    /// The winning action, addressed by its host-assigned id
    pub action: ActionId,
    /// Result bundle to attach to the action's pending handle
    pub results: ResultBundle,
}

/// True iff at least one action carries at least one remote-input descriptor.
pub fn has_reply_action(actions: &[NotificationAction]) -> bool {
    actions.iter().any(|action| !action.remote_inputs.is_empty())
}

/// Resolve a reply request against the current active-notification snapshot.
///
/// The winning action is the first one with remote inputs; every one of its
/// remote inputs receives the identical reply text.
pub fn resolve_reply(
    active: &[Notification],
    request: &ReplyRequest,
) -> Result<ReplyDispatch, ReplyError> {
    let target = active
        .iter()
        .find(|n| {
            n.key == request.key
                && request.package.as_deref().is_none_or(|p| n.package == p)
        })
        .ok_or_else(|| ReplyError::NotificationNotFound {
            key: request.key.clone(),
        })?;

    let action = target
        .actions
        .iter()
        .find(|a| !a.remote_inputs.is_empty())
        .ok_or_else(|| ReplyError::NoReplyAction {
            key: request.key.clone(),
        })?;

    let results: ResultBundle = action
        .remote_inputs
        .iter()
        .map(|input| (input.result_key.clone(), request.text.clone()))
        .collect();

    Ok(ReplyDispatch {
        notification_key: target.key.clone(),
        action: action.id.clone(),
        results,
    })
}
