//! Listener permission status value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grant state of the notification-listener capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    /// The current package is in the host's enabled-listener set
    Authorized,
    /// The host answered, but the current package is not in the set
    Denied,
    /// No attached application context to ask
    Unknown,
}

impl PermissionStatus {
    /// Get the string identifier for this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Denied => "denied",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings() {
        assert_eq!(PermissionStatus::Authorized.as_str(), "authorized");
        assert_eq!(PermissionStatus::Denied.as_str(), "denied");
        assert_eq!(PermissionStatus::Unknown.as_str(), "unknown");
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&PermissionStatus::Authorized).unwrap();
        assert_eq!(json, "\"authorized\"");
    }
}
