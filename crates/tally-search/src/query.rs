//! Ordered query-string state with `URLSearchParams` semantics.
//!
//! # Design
//! - Keep pairs in document order; duplicates are legal and preserved.
//! - Encode and decode as `application/x-www-form-urlencoded` so strings
//!   round-trip with what the browser produces.

use url::form_urlencoded;

use crate::config::SearchConfig;

/// Decoded URL query parameters in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    /// Decode a query string. A leading `?` is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether any pair uses `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(name, _)| name == key)
    }

    /// Replace the first `key` in place and drop later duplicates; append when absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let mut pending = Some(value.into());
        let mut seen = false;
        self.pairs.retain_mut(|(name, current)| {
            if name.as_str() != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            if let Some(value) = pending.take() {
                *current = value;
            }
            true
        });
        if let Some(value) = pending {
            self.pairs.push((key.to_string(), value));
        }
    }

    /// Remove every pair stored under `key`.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(name, _)| name != key);
    }

    /// Number of stored pairs, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pairs are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Encode as `key=value` pairs joined by `&`, without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryState
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Typed view of the parameters a search box owns, for the hosting page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Active search term, if any.
    pub term: Option<String>,
    /// One-based results page.
    pub page: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { term: None, page: 1 }
    }
}

impl SearchParams {
    /// Read the term and page from `query` using the configured parameter names.
    ///
    /// Missing, unparsable or zero pages read as page 1; empty terms read as `None`.
    #[must_use]
    pub fn read(query: &QueryState, config: &SearchConfig) -> Self {
        let term = query
            .get(&config.query_param)
            .filter(|term| !term.is_empty())
            .map(str::to_string);
        let page = query
            .get(&config.page_param)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1);
        Self { term, page }
    }
}
