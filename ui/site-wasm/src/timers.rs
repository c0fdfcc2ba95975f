//! `Scheduler` backed by browser timers.

use gloo_timers::callback::{Interval, Timeout};
use tdc_site_core::scheduler::Scheduler;

pub enum TimerHandle {
    Once(Timeout),
    Every(Interval),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Once(Timeout::new(delay_ms, task))
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Every(Interval::new(period_ms, task))
    }
}
