//! Smooth scrolling for in-page anchor links.

use crate::dom;
use crate::events::ListenerSet;
use tdc_site_core::anchor::in_page_target;
use tdc_site_core::SiteError;
use tdc_site_types::Selectors;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn scroll_to(target: &web_sys::Element, hash: &str) -> Result<(), SiteError> {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);

    dom::window()?
        .history()
        .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(hash)))
        .map_err(dom::js_err("smooth scroll"))
}

/// Returns the number of links bound.
pub fn bind(selectors: &Selectors, listeners: &mut ListenerSet) -> Result<usize, SiteError> {
    let links: Vec<HtmlAnchorElement> = dom::query_all(&selectors.anchor_links)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .collect();
    if links.is_empty() {
        return Err(SiteError::missing("smooth scroll", &selectors.anchor_links));
    }

    for link in &links {
        let anchor = link.clone();
        listeners.on(link, "click", move |e: Event| {
            let hash = anchor.hash();
            let Some(id) = in_page_target(&anchor.pathname(), &hash, &dom::current_pathname()) else {
                return;
            };
            let Some(target) = dom::by_id(&id) else {
                return;
            };
            e.prevent_default();
            if let Err(err) = scroll_to(&target, &hash) {
                tracing::warn!(%err, "history update failed");
            }
        })?;
    }
    Ok(links.len())
}
