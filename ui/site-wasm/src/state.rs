//! The auto-booted site handle.
//!
//! Uses `thread_local!` storage (WASM is single-threaded).

use crate::SiteHandle;
use std::cell::RefCell;

thread_local! {
    static CURRENT: RefCell<Option<SiteHandle>> = const { RefCell::new(None) };
}

pub fn current() -> Option<SiteHandle> {
    CURRENT.with(|c| c.borrow().clone())
}

pub fn set_current(handle: SiteHandle) {
    CURRENT.with(|c| *c.borrow_mut() = Some(handle));
}
