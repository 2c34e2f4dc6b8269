//! Domain error types

use thiserror::Error;

/// Error when replying to a notification.
///
/// Every failure carries a stable machine-readable code (see [`ReplyError::code`])
/// so the embedding runtime can branch without parsing messages.
#[derive(Debug, Clone, Error)]
pub enum ReplyError {
    #[error("Notification listener service is not running")]
    ServiceNotRunning,

    #[error("No active notification matches key \"{key}\"")]
    NotificationNotFound { key: String },

    #[error("Notification \"{key}\" has no action accepting remote input")]
    NoReplyAction { key: String },

    #[error("Host lookup failed: {0}")]
    Host(String),

    #[error("Failed to invoke the reply action: {0}")]
    Dispatch(String),
}

impl ReplyError {
    /// Reason code surfaced through the result channel
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ServiceNotRunning => "SERVICE_NOT_RUNNING",
            Self::NotificationNotFound { .. } => "NOTIFICATION_NOT_FOUND",
            Self::NoReplyAction { .. } => "NO_REPLY_ACTION",
            Self::Host(_) => "HOST_ERROR",
            Self::Dispatch(_) => "DISPATCH_FAILED",
        }
    }
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_error_codes_are_stable() {
        assert_eq!(ReplyError::ServiceNotRunning.code(), "SERVICE_NOT_RUNNING");
        assert_eq!(
            ReplyError::NotificationNotFound { key: "0|app|1".into() }.code(),
            "NOTIFICATION_NOT_FOUND"
        );
        assert_eq!(
            ReplyError::NoReplyAction { key: "0|app|1".into() }.code(),
            "NO_REPLY_ACTION"
        );
        assert_eq!(ReplyError::Host("gone".into()).code(), "HOST_ERROR");
        assert_eq!(ReplyError::Dispatch("canceled".into()).code(), "DISPATCH_FAILED");
    }

    #[test]
    fn reply_error_messages_mention_the_key() {
        let err = ReplyError::NotificationNotFound { key: "0|com.app|7".into() };
        assert!(err.to_string().contains("0|com.app|7"));
    }
}
