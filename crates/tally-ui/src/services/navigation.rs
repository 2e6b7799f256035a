//! Browser history adapter for the search box.
//!
//! # Design
//! - Read the live location on every call so a delayed search sees the URL as it
//!   is when the timer fires, not as it was when the key was pressed.
//! - Replace through the router's shared `BrowserHistory` so `use_location`
//!   subscribers re-render without a reload or a new history entry.

use gloo::console;
use tally_search::{Navigation, QueryState};
use yew_router::history::{BrowserHistory, History};

/// [`Navigation`] over `window.history`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BrowserNavigation {
    history: BrowserHistory,
}

impl BrowserNavigation {
    pub(crate) fn new() -> Self {
        Self {
            history: BrowserHistory::new(),
        }
    }
}

impl Navigation for BrowserNavigation {
    fn current_query(&self) -> QueryState {
        QueryState::parse(self.history.location().query_str())
    }

    fn current_path(&self) -> String {
        self.history.location().path().to_string()
    }

    fn replace(&self, target: &str) {
        console::debug!("searching...", target);
        self.history.replace(target.to_string());
    }
}
