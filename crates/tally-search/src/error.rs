//! Error types for search box configuration.

use thiserror::Error;

/// Convenient result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Primary error type for search box configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration payload could not be decoded.
    #[error("failed to parse search configuration")]
    Parse {
        /// Underlying JSON decode error.
        #[source]
        source: serde_json::Error,
    },
    /// Field contained an invalid value.
    #[error("invalid search configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The query and page parameters resolve to the same key.
    #[error("query and page parameters share a name")]
    ParamCollision {
        /// Shared parameter name.
        name: String,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_error_exposes_source() {
        let err: ConfigError = serde_json::from_str::<u32>("nope")
            .map_err(ConfigError::from)
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to parse search configuration");
        assert!(err.source().is_some());
    }

    #[test]
    fn collision_message_is_stable() {
        let err = ConfigError::ParamCollision {
            name: "q".to_string(),
        };
        assert_eq!(err.to_string(), "query and page parameters share a name");
    }
}
