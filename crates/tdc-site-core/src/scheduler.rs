//! Timer abstraction.
//!
//! Browser timers and the test clock both hand out handles that cancel the
//! timer when dropped, so a component releases its timers by dropping them.

pub trait Scheduler: Clone + 'static {
    /// Cancels the timer on drop.
    type Handle: 'static;

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Handle;
}
