#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Query-string backed search state for the Tally dashboard.
//!
//! This crate holds the platform-neutral half of the search box: the
//! `URLSearchParams`-style query state, the rule that rewrites it for a new
//! search term, the navigation and timer seams, and the debouncer that
//! coalesces keystrokes. The Yew component in `tally-ui` plugs browser
//! implementations into these seams; tests plug in virtual ones.

pub mod config;
pub mod debounce;
pub mod error;
pub mod navigation;
pub mod query;
pub mod search;

pub use config::SearchConfig;
pub use debounce::{Debouncer, Timer};
pub use error::{ConfigError, Result};
pub use navigation::{Navigation, replace_target};
pub use query::{QueryState, SearchParams};
pub use search::{SearchBox, SearchUpdate, apply_search};
