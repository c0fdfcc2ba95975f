//! Test doubles shared by the component tests.

use crate::scheduler::Scheduler;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

enum Run {
    Once(Box<dyn FnOnce()>),
    Every(Box<dyn FnMut()>),
}

struct Task {
    id: u64,
    due: u64,
    period: Option<u64>,
    run: Run,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Clock {
    now: Cell<u64>,
    next_id: Cell<u64>,
    tasks: RefCell<Vec<Task>>,
}

/// Deterministic clock: time only moves when the test calls `advance`.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<Clock>,
}

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.clock.now.get()
    }

    /// Live (not cancelled, not yet finished) timers.
    pub fn pending(&self) -> usize {
        self.clock
            .tasks
            .borrow()
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut tasks = self.clock.tasks.borrow_mut();
                tasks.retain(|t| !t.cancelled.get());
                let idx = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                match idx {
                    Some(i) => tasks.remove(i),
                    None => break,
                }
            };
            self.clock.now.set(next.due);
            match next.run {
                Run::Once(f) => f(),
                Run::Every(mut f) => {
                    f();
                    if !next.cancelled.get() {
                        let period = next.period.unwrap_or(1);
                        self.clock.tasks.borrow_mut().push(Task {
                            due: next.due + period,
                            run: Run::Every(f),
                            ..next
                        });
                    }
                }
            }
        }
        self.clock.now.set(target);
    }

    fn push(&self, delay_ms: u32, period: Option<u64>, run: Run) -> ManualHandle {
        let id = self.clock.next_id.get();
        self.clock.next_id.set(id + 1);
        let cancelled = Rc::new(Cell::new(false));
        self.clock.tasks.borrow_mut().push(Task {
            id,
            due: self.now() + u64::from(delay_ms),
            period,
            run,
            cancelled: cancelled.clone(),
        });
        ManualHandle { cancelled }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        self.push(delay_ms, None, Run::Once(task))
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> ManualHandle {
        let period = u64::from(period_ms.max(1));
        self.push(period_ms.max(1), Some(period), Run::Every(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_at_due_time_only() {
        let clock = ManualScheduler::default();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _handle = clock.once(100, Box::new(move || h.set(h.get() + 1)));

        clock.advance(99);
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        assert_eq!(hits.get(), 1);
        clock.advance(1_000);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn every_repeats_until_handle_dropped() {
        let clock = ManualScheduler::default();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let handle = clock.every(10, Box::new(move || h.set(h.get() + 1)));

        clock.advance(35);
        assert_eq!(hits.get(), 3);
        drop(handle);
        clock.advance(100);
        assert_eq!(hits.get(), 3);
        assert_eq!(clock.pending(), 0);
    }
}
