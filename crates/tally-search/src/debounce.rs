//! Last-call-wins debouncing over a pluggable timer.
//!
//! # Design
//! - One timer slot per debouncer; arming drops (and so cancels) the previous handle.
//! - The pending argument lives outside the timer so `flush` and `cancel` stay
//!   independent of the backend.
//! - Dropping the debouncer cancels anything still pending.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// One-shot timer backend.
///
/// Dropping the returned handle must cancel the callback if it has not fired.
pub trait Timer {
    /// Cancel-on-drop handle for a scheduled callback.
    type Handle;

    /// Schedule `callback` to run once after `delay`.
    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Wraps a handler so only the last call within a rolling quiet window runs.
pub struct Debouncer<T: Timer, A: 'static> {
    timer: T,
    delay: Duration,
    handler: Rc<dyn Fn(A)>,
    pending: Rc<RefCell<Option<A>>>,
    armed: RefCell<Option<T::Handle>>,
}

impl<T: Timer, A: 'static> Debouncer<T, A> {
    /// Build a debouncer that runs `handler` once `delay` passes without new calls.
    pub fn new(timer: T, delay: Duration, handler: impl Fn(A) + 'static) -> Self {
        Self {
            timer,
            delay,
            handler: Rc::new(handler),
            pending: Rc::new(RefCell::new(None)),
            armed: RefCell::new(None),
        }
    }

    /// Record `arg` as the latest call and re-arm the timer.
    ///
    /// A zero delay runs the handler synchronously.
    pub fn call(&self, arg: A) {
        self.disarm();
        if self.delay.is_zero() {
            self.pending.borrow_mut().take();
            (self.handler)(arg);
            return;
        }

        *self.pending.borrow_mut() = Some(arg);
        let pending = Rc::clone(&self.pending);
        let handler = Rc::clone(&self.handler);
        let handle = self.timer.start(
            self.delay,
            Box::new(move || {
                let next = pending.borrow_mut().take();
                if let Some(arg) = next {
                    handler(arg);
                }
            }),
        );
        *self.armed.borrow_mut() = Some(handle);
        tracing::trace!(delay = ?self.delay, "debounce armed");
    }

    /// Run the pending call now instead of waiting for the timer.
    pub fn flush(&self) {
        self.disarm();
        let next = self.pending.borrow_mut().take();
        if let Some(arg) = next {
            (self.handler)(arg);
        }
    }

    /// Drop the pending call and its timer.
    pub fn cancel(&self) {
        self.disarm();
        if self.pending.borrow_mut().take().is_some() {
            tracing::trace!("debounce cancelled");
        }
    }

    /// Whether a call is waiting for the quiet window to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Configured quiet window.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    fn disarm(&self) {
        let previous = self.armed.borrow_mut().take();
        drop(previous);
    }
}

impl<T: Timer, A: 'static> Drop for Debouncer<T, A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Slot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    /// Holds the most recent callback until the test fires it by hand.
    #[derive(Default)]
    struct HandTimer {
        slots: RefCell<Vec<Slot>>,
        started: Cell<usize>,
    }

    struct HandHandle(Slot);

    impl Drop for HandHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl Timer for &HandTimer {
        type Handle = HandHandle;

        fn start(&self, _delay: Duration, callback: Box<dyn FnOnce()>) -> HandHandle {
            let slot: Slot = Rc::new(RefCell::new(Some(callback)));
            self.slots.borrow_mut().push(Rc::clone(&slot));
            self.started.set(self.started.get() + 1);
            HandHandle(slot)
        }
    }

    impl HandTimer {
        fn fire_all(&self) {
            let slots: Vec<Slot> = self.slots.borrow_mut().drain(..).collect();
            for slot in slots {
                let callback = slot.borrow_mut().take();
                if let Some(callback) = callback {
                    callback();
                }
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |term: String| sink.borrow_mut().push(term))
    }

    #[test]
    fn rearming_cancels_previous_callback() {
        let timer = HandTimer::default();
        let (seen, handler) = recorder();
        let debouncer = Debouncer::new(&timer, Duration::from_millis(500), handler);

        debouncer.call("l".to_string());
        debouncer.call("la".to_string());
        debouncer.call("lamp".to_string());
        assert!(debouncer.is_pending());
        assert_eq!(timer.started.get(), 3);

        timer.fire_all();
        assert_eq!(*seen.borrow(), vec!["lamp".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn flush_runs_pending_call_once() {
        let timer = HandTimer::default();
        let (seen, handler) = recorder();
        let debouncer = Debouncer::new(&timer, Duration::from_millis(500), handler);

        debouncer.call("chair".to_string());
        debouncer.flush();
        debouncer.flush();
        timer.fire_all();
        assert_eq!(*seen.borrow(), vec!["chair".to_string()]);
    }

    #[test]
    fn cancel_and_drop_discard_pending_call() {
        let timer = HandTimer::default();
        let (seen, handler) = recorder();
        {
            let debouncer = Debouncer::new(&timer, Duration::from_millis(500), handler);
            debouncer.call("gone".to_string());
            debouncer.cancel();
            assert!(!debouncer.is_pending());
            debouncer.call("also gone".to_string());
        }
        timer.fire_all();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn zero_delay_runs_synchronously() {
        let timer = HandTimer::default();
        let (seen, handler) = recorder();
        let debouncer = Debouncer::new(&timer, Duration::ZERO, handler);

        debouncer.call("now".to_string());
        assert_eq!(*seen.borrow(), vec!["now".to_string()]);
        assert_eq!(timer.started.get(), 0);
        assert_eq!(debouncer.delay(), Duration::ZERO);
    }
}
