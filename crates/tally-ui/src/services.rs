//! Browser-backed implementations of the search seams.

pub(crate) mod navigation;
pub(crate) mod timer;

pub(crate) use navigation::BrowserNavigation;
pub(crate) use timer::GlooTimer;
