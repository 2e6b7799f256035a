//! `setTimeout` timer backend.

use crate::timing::timeout_millis;
use gloo_timers::callback::Timeout;
use std::time::Duration;
use tally_search::Timer;

/// Schedules callbacks with `gloo-timers`; dropping the [`Timeout`] clears it.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = Timeout;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(timeout_millis(delay), callback)
    }
}
