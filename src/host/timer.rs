//! One-shot deferred callbacks.
//!
//! Callbacks are fire-and-forget: nothing hands back a cancel handle, and a
//! scheduled callback always runs once its delay has elapsed.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::rc::Rc;

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// `setTimeout` via `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }
}

struct Task {
    due_ms: u64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Task>,
}

/// Virtual clock driven by [`ManualScheduler::advance`].
///
/// Tasks with equal due times run in scheduling order. Callbacks may schedule
/// further tasks; those run within the same `advance` if they fall due.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward by `ms`, running every task that falls due.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due_ms <= target)
                    .min_by_key(|(_, task)| (task.due_ms, task.seq))
                    .map(|(index, _)| index);
                if let Some(index) = due {
                    let task = clock.pending.remove(index);
                    clock.now_ms = task.due_ms;
                    Some(task)
                } else {
                    clock.now_ms = target;
                    None
                }
            };
            // Run outside the borrow so the callback can schedule again.
            match next {
                Some(task) => (task.callback)(),
                None => break,
            }
        }
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now_ms", &clock.now_ms)
            .field("pending", &clock.pending.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let task = Task { due_ms: clock.now_ms + u64::from(delay_ms), seq: clock.next_seq, callback };
        clock.next_seq += 1;
        clock.pending.push(task);
    }
}
