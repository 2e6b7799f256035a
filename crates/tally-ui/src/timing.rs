//! Conversions between debounce windows and browser timer arguments.

use std::time::Duration;

/// Milliseconds to hand `setTimeout`, saturating at `u32::MAX`.
#[must_use]
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
