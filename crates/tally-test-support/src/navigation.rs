//! In-memory navigation that records every replacement.

use std::cell::RefCell;
use std::rc::Rc;

use tally_search::{Navigation, QueryState};

#[derive(Debug, Default)]
struct Location {
    path: String,
    query: String,
    replacements: Vec<String>,
    history_len: usize,
}

/// Navigation double holding a single location.
///
/// Clones share state so a test can keep a handle after moving one into a search box.
#[derive(Clone, Debug)]
pub struct MemoryNavigation {
    inner: Rc<RefCell<Location>>,
}

impl MemoryNavigation {
    /// Start at `path` with the encoded `query` (a leading `?` is accepted).
    #[must_use]
    pub fn new(path: &str, query: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Location {
                path: path.to_string(),
                query: query.trim_start_matches('?').to_string(),
                replacements: Vec::new(),
                history_len: 1,
            })),
        }
    }

    /// Push a new entry, as a link click or back/forward would.
    pub fn push(&self, path: &str, query: &str) {
        let mut location = self.inner.borrow_mut();
        location.path = path.to_string();
        location.query = query.trim_start_matches('?').to_string();
        location.history_len += 1;
    }

    /// Every target passed to [`Navigation::replace`], oldest first.
    #[must_use]
    pub fn replacements(&self) -> Vec<String> {
        self.inner.borrow().replacements.clone()
    }

    /// Current location as `path` or `path?query`.
    #[must_use]
    pub fn href(&self) -> String {
        let location = self.inner.borrow();
        if location.query.is_empty() {
            location.path.clone()
        } else {
            format!("{}?{}", location.path, location.query)
        }
    }

    /// Encoded query of the current location, without `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.inner.borrow().query.clone()
    }

    /// Number of history entries; replacements never change it.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.inner.borrow().history_len
    }
}

impl Navigation for MemoryNavigation {
    fn current_query(&self) -> QueryState {
        QueryState::parse(&self.inner.borrow().query)
    }

    fn current_path(&self) -> String {
        self.inner.borrow().path.clone()
    }

    fn replace(&self, target: &str) {
        let mut location = self.inner.borrow_mut();
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        location.path = path.to_string();
        location.query = query.to_string();
        location.replacements.push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_updates_location_without_history() {
        let nav = MemoryNavigation::new("/dashboard/invoices", "?query=old");
        nav.replace("/dashboard/invoices?page=1");
        assert_eq!(nav.href(), "/dashboard/invoices?page=1");
        assert_eq!(nav.current_query().get("page"), Some("1"));
        assert_eq!(nav.history_len(), 1);
        assert_eq!(nav.replacements(), vec!["/dashboard/invoices?page=1"]);
    }

    #[test]
    fn push_grows_history() {
        let nav = MemoryNavigation::new("/", "");
        nav.push("/dashboard/customers", "query=ada");
        assert_eq!(nav.current_path(), "/dashboard/customers");
        assert_eq!(nav.query_string(), "query=ada");
        assert_eq!(nav.history_len(), 2);
        assert!(nav.replacements().is_empty());
    }
}
