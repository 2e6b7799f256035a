//! Seam between the search box and the host's navigation state.

use crate::query::QueryState;

/// Read and replace the current location without adding history entries.
///
/// Implementations use interior mutability; the search box only holds a shared
/// reference for its lifetime.
pub trait Navigation {
    /// Decoded parameters of the current URL.
    fn current_query(&self) -> QueryState;

    /// Path of the current URL, without the query string.
    fn current_path(&self) -> String;

    /// Swap the current entry for `target` (path plus optional `?query`).
    fn replace(&self, target: &str);
}

/// Join a path and an encoded query; an empty query yields the bare path.
#[must_use]
pub fn replace_target(path: &str, query: &QueryState) -> String {
    let encoded = query.to_query_string();
    if encoded.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{encoded}")
    }
}
