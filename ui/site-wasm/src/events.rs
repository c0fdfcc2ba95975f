//! Event listener registry.
//!
//! Listeners stay registered until the set is cleared, which detaches them
//! from their targets and drops the Rust closures (and whatever controllers
//! they captured).

use tdc_site_core::SiteError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

struct Registered {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

#[derive(Default)]
pub struct ListenerSet {
    registered: Vec<Registered>,
}

impl ListenerSet {
    pub fn on(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), SiteError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| SiteError::dom("events", format!("{event}: {e:?}")))?;
        self.registered.push(Registered {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    /// Click listener that suppresses the default action first.
    pub fn on_click_prevent(
        &mut self,
        target: &EventTarget,
        mut handler: impl FnMut() + 'static,
    ) -> Result<(), SiteError> {
        self.on(target, "click", move |e: Event| {
            e.prevent_default();
            handler();
        })
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub fn clear(&mut self) {
        for r in self.registered.drain(..) {
            let _ = r
                .target
                .remove_event_listener_with_callback(r.event, r.callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.clear();
    }
}
