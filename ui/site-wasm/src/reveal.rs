//! Scroll-reveal bindings over `IntersectionObserver`.

use crate::dom;
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use tdc_site_core::reveal::{RevealAnimator, RevealView};
use tdc_site_core::SiteError;
use tdc_site_types::SiteConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub struct DomReveal {
    elements: Vec<Element>,
    observer: OnceCell<IntersectionObserver>,
}

impl RevealView for DomReveal {
    fn mark_pending(&self, index: usize) {
        if let Some(el) = self.elements.get(index) {
            dom::add_class(el, "reveal");
        }
    }

    fn mark_revealed(&self, index: usize) {
        if let Some(el) = self.elements.get(index) {
            dom::add_class(el, "reveal-in");
            dom::add_class(el, "fade-up");
        }
    }

    fn unobserve(&self, index: usize) {
        if let (Some(el), Some(observer)) = (self.elements.get(index), self.observer.get()) {
            observer.unobserve(el);
        }
    }
}

type Animator = RevealAnimator<DomReveal>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer and its callback alive until dropped.
pub struct RevealBinding {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn bind(config: &SiteConfig) -> Result<RevealBinding, SiteError> {
    let selector = &config.selectors.reveal_targets;
    let elements = dom::query_all(selector);
    if elements.is_empty() {
        return Err(SiteError::missing("scroll reveal", selector));
    }
    let count = elements.len();

    let view = DomReveal {
        elements,
        observer: OnceCell::new(),
    };
    let animator: Rc<RefCell<Animator>> =
        Rc::new(RefCell::new(RevealAnimator::new(view, count, config.reveal.threshold)));

    let on_entries = animator.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: IntersectionObserver| {
        let mut animator = on_entries.borrow_mut();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = animator.view().index_of(&target) else {
                continue;
            };
            animator.on_intersection(index, entry.intersection_ratio(), entry.is_intersecting());
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    init.set_root_margin(&config.reveal.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(dom::js_err("scroll reveal"))?;

    {
        let animator = animator.borrow();
        let view = animator.view();
        let _ = view.observer.set(observer.clone());
        for el in &view.elements {
            observer.observe(el);
        }
    }
    tracing::info!(count, "scroll reveal observing");

    Ok(RevealBinding {
        observer,
        _callback: callback,
    })
}

impl DomReveal {
    fn index_of(&self, target: &Element) -> Option<usize> {
        self.elements.iter().position(|el| el == target)
    }
}
