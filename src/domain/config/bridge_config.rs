//! Bridge configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Buffer size of the channel dispatcher when none is configured.
pub const DEFAULT_DISPATCH_CAPACITY: usize = 64;

/// Bridge configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Package identity checked against the host's enabled-listener set
    pub package_name: Option<String>,
    /// Buffer size of the channel dispatcher
    pub dispatch_capacity: Option<usize>,
}

impl BridgeConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            package_name: None,
            dispatch_capacity: Some(DEFAULT_DISPATCH_CAPACITY),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            package_name: other.package_name.or(self.package_name),
            dispatch_capacity: other.dispatch_capacity.or(self.dispatch_capacity),
        }
    }

    /// Validate field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch_capacity == Some(0) {
            return Err(ConfigError::ValidationError {
                key: "dispatch_capacity".into(),
                message: "must be greater than zero".into(),
            });
        }

        if let Some(name) = &self.package_name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: "package_name".into(),
                    message: "must not be empty".into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_other() {
        let base = BridgeConfig {
            package_name: Some("com.example.app".into()),
            dispatch_capacity: Some(32),
        };
        let other = BridgeConfig {
            package_name: Some("com.example.override".into()),
            dispatch_capacity: None,
        };

        let merged = base.merge(other);
        assert_eq!(merged.package_name, Some("com.example.override".into()));
        assert_eq!(merged.dispatch_capacity, Some(32));
    }

    #[test]
    fn defaults_validate() {
        assert!(BridgeConfig::defaults().validate().is_ok());
        assert!(BridgeConfig::empty().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = BridgeConfig {
            dispatch_capacity: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn blank_package_name_is_rejected() {
        let config = BridgeConfig {
            package_name: Some("   ".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
