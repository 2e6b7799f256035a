//! Search box configuration with serde defaults and validation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Quiet period applied to keystrokes before the URL is rewritten.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
/// Parameter carrying the search term.
pub const DEFAULT_QUERY_PARAM: &str = "query";
/// Parameter carrying the current results page.
pub const DEFAULT_PAGE_PARAM: &str = "page";
/// Accessible label announced for the input.
pub const DEFAULT_LABEL: &str = "Search";

/// Tunables for a search box instance.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Debounce window in milliseconds; zero applies every keystroke immediately.
    pub debounce_ms: u64,
    /// Query parameter written with the search term.
    pub query_param: String,
    /// Query parameter reset to `1` on every search.
    pub page_param: String,
    /// Visually hidden label text for assistive technology.
    pub label: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the payload is not valid JSON for this
    /// shape, or any error produced by [`SearchConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field invariants.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] for empty labels or malformed
    /// parameter names, and [`ConfigError::ParamCollision`] when both
    /// parameters share a name.
    pub fn validate(&self) -> Result<()> {
        validate_param("query_param", &self.query_param)?;
        validate_param("page_param", &self.page_param)?;
        if self.query_param == self.page_param {
            return Err(ConfigError::ParamCollision {
                name: self.query_param.clone(),
            });
        }
        if self.label.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "label",
                value: self.label.clone(),
                reason: "empty",
            });
        }
        Ok(())
    }

    /// Debounce window as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn validate_param(field: &'static str, value: &str) -> Result<()> {
    let reason = if value.is_empty() {
        "empty"
    } else if value.chars().any(char::is_whitespace) {
        "contains whitespace"
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidField {
        field,
        value: value.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SearchConfig::from_json("{}").expect("config");
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn overrides_are_applied() {
        let config = SearchConfig::from_json(r#"{"debounce_ms": 0, "query_param": "q"}"#)
            .expect("config");
        assert_eq!(config.debounce_ms, 0);
        assert_eq!(config.query_param, "q");
        assert_eq!(config.page_param, DEFAULT_PAGE_PARAM);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SearchConfig::from_json(r#"{"delay": 10}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn colliding_params_are_rejected() {
        let err = SearchConfig::from_json(r#"{"query_param": "page"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParamCollision { ref name } if name == "page"));
    }

    #[test]
    fn malformed_params_report_field_and_reason() {
        let err = SearchConfig::from_json(r#"{"page_param": "my page"}"#).unwrap_err();
        match err {
            ConfigError::InvalidField { field, reason, .. } => {
                assert_eq!(field, "page_param");
                assert_eq!(reason, "contains whitespace");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = SearchConfig::from_json(r#"{"query_param": ""}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "query_param",
                reason: "empty",
                ..
            }
        ));
    }

    #[test]
    fn blank_label_is_rejected() {
        let err = SearchConfig::from_json(r#"{"label": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { field: "label", .. }));
    }
}
