//! Virtual-clock timer for driving debounced code deterministically.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tally_search::Timer;

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    scheduled: BTreeMap<u64, (Duration, Callback)>,
    fired: usize,
}

/// Timer whose clock only moves when a test calls [`ManualTimer::advance`].
///
/// Clones share one clock.
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<RefCell<Clock>>,
}

/// Cancel-on-drop handle returned by [`ManualTimer`].
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            let removed = clock.borrow_mut().scheduled.remove(&self.id);
            drop(removed);
        }
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.scheduled.insert(id, (due, callback));
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl ManualTimer {
    /// Create a timer with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, firing due callbacks in deadline order.
    ///
    /// Callbacks run without the clock borrowed, so they may schedule or cancel.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let next_id = clock
                    .scheduled
                    .iter()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by_key(|(id, (due, _))| (*due, **id))
                    .map(|(id, _)| *id);
                next_id.and_then(|id| clock.scheduled.remove(&id)).map(|(due, callback)| {
                    clock.now = due;
                    clock.fired += 1;
                    callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Callbacks scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn armed(&self) -> usize {
        self.clock.borrow().scheduled.len()
    }

    /// Callbacks fired so far.
    #[must_use]
    pub fn fired(&self) -> usize {
        self.clock.borrow().fired
    }
}
