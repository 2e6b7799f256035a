//! Search term to URL rewrite rule and the debounced search box model.
//!
//! # Design
//! - `SearchUpdate` is the pure rewrite: set or clear the term, reset paging.
//! - `SearchBox` wires that rewrite to a [`Navigation`] through a [`Debouncer`],
//!   seeding the input value once from the location it was created against and
//!   afterwards following only what the user types.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SearchConfig;
use crate::debounce::{Debouncer, Timer};
use crate::navigation::{Navigation, replace_target};
use crate::query::QueryState;

/// Page value written whenever the search term changes.
pub const FIRST_PAGE: &str = "1";

/// Rewrites query state for a new search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchUpdate {
    query_param: String,
    page_param: String,
}

impl SearchUpdate {
    /// Build the rule from configured parameter names.
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            query_param: config.query_param.clone(),
            page_param: config.page_param.clone(),
        }
    }

    /// Apply `term` to `query`.
    ///
    /// Blank terms remove the query parameter instead of storing an empty value.
    /// Non-blank terms are stored as typed. The page parameter always resets.
    pub fn apply(&self, query: &mut QueryState, term: &str) {
        if term.trim().is_empty() {
            query.delete(&self.query_param);
        } else {
            query.set(&self.query_param, term);
        }
        query.set(&self.page_param, FIRST_PAGE);
    }
}

impl Default for SearchUpdate {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

/// Read the current location, apply `term`, and replace the location.
///
/// Returns the replacement target that was handed to the navigation.
pub fn apply_search<N: Navigation + ?Sized>(
    navigation: &N,
    update: &SearchUpdate,
    term: &str,
) -> String {
    let mut query = navigation.current_query();
    update.apply(&mut query, term);
    let target = replace_target(&navigation.current_path(), &query);
    tracing::debug!(term, target = %target, "searching");
    navigation.replace(&target);
    target
}

/// Debounced search box bound to one navigation context.
pub struct SearchBox<N: Navigation + 'static, T: Timer> {
    config: SearchConfig,
    initial_value: String,
    value: RefCell<String>,
    navigation: Rc<N>,
    debouncer: Debouncer<T, String>,
}

impl<N: Navigation + 'static, T: Timer> SearchBox<N, T> {
    /// Bind a search box to `navigation`, debouncing with `timer`.
    ///
    /// The input value is seeded from the current query parameter here and never
    /// re-read afterwards.
    pub fn new(config: SearchConfig, navigation: N, timer: T) -> Self {
        let navigation = Rc::new(navigation);
        let initial_value = navigation
            .current_query()
            .get(&config.query_param)
            .unwrap_or_default()
            .to_string();
        let update = SearchUpdate::from_config(&config);
        let debouncer = {
            let navigation = Rc::clone(&navigation);
            Debouncer::new(timer, config.debounce(), move |term: String| {
                apply_search(navigation.as_ref(), &update, &term);
            })
        };
        Self {
            config,
            value: RefCell::new(initial_value.clone()),
            initial_value,
            navigation,
            debouncer,
        }
    }

    /// Value the input field starts with.
    #[must_use]
    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    /// Text the field currently shows: the seed until the user types, then the last input.
    ///
    /// Location changes never touch it, so re-rendering from it keeps user keystrokes.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    /// Feed the raw value of an input event.
    pub fn input(&self, term: impl Into<String>) {
        let term = term.into();
        *self.value.borrow_mut() = term.clone();
        self.debouncer.call(term);
    }

    /// Apply the pending term immediately.
    pub fn flush(&self) {
        self.debouncer.flush();
    }

    /// Cancel any pending update; call when the owning view is torn down.
    pub fn teardown(&self) {
        self.debouncer.cancel();
    }

    /// Whether an update is waiting for the quiet window.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Configuration this box was built with.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Navigation context this box writes to.
    #[must_use]
    pub fn navigation(&self) -> &N {
        &self.navigation
    }
}
