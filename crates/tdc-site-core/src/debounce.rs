//! Rate limiting for noisy window events.
//!
//! Trailing mode runs the handler once the events have been quiet for
//! `wait_ms`. Leading mode runs it on the first event and ignores the rest
//! until a quiet period has passed.

use crate::scheduler::Scheduler;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct Shared<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    leading: bool,
    handler: Box<dyn Fn()>,
    generation: Cell<u64>,
    pending: Cell<bool>,
    timer: RefCell<Option<S::Handle>>,
}

pub struct Debounced<S: Scheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler> Clone for Debounced<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S: Scheduler> Debounced<S> {
    pub fn trailing(scheduler: S, wait_ms: u32, handler: impl Fn() + 'static) -> Self {
        Self::build(scheduler, wait_ms, false, Box::new(handler))
    }

    pub fn leading(scheduler: S, wait_ms: u32, handler: impl Fn() + 'static) -> Self {
        Self::build(scheduler, wait_ms, true, Box::new(handler))
    }

    fn build(scheduler: S, wait_ms: u32, leading: bool, handler: Box<dyn Fn()>) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                wait_ms,
                leading,
                handler,
                generation: Cell::new(0),
                pending: Cell::new(false),
                timer: RefCell::new(None),
            }),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.shared.pending.get()
    }

    /// Records one triggering event.
    pub fn call(&self) {
        let shared = &self.shared;
        let fire_now = shared.leading && !shared.pending.get();

        let generation = shared.generation.get() + 1;
        shared.generation.set(generation);
        shared.pending.set(true);

        let weak: Weak<Shared<S>> = Rc::downgrade(shared);
        let handle = shared.scheduler.once(
            shared.wait_ms,
            Box::new(move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                if shared.generation.get() != generation {
                    return;
                }
                shared.pending.set(false);
                if !shared.leading {
                    (shared.handler)();
                }
            }),
        );
        // Replacing the handle cancels the previous quiet-period timer.
        *shared.timer.borrow_mut() = Some(handle);

        if fire_now {
            (shared.handler)();
        }
    }

    /// Drops any pending invocation.
    pub fn cancel(&self) {
        self.shared.pending.set(false);
        self.shared.timer.borrow_mut().take();
    }
}
