//! Debounced window handlers: header styling on scroll, the legacy
//! waypoint reveal pass, and the resize hook.

use crate::dom;
use crate::events::ListenerSet;
use crate::timers::BrowserScheduler;
use tdc_site_core::debounce::Debounced;
use tdc_site_core::scroll::{due_waypoints, header_scrolled};
use tdc_site_core::SiteError;
use tdc_site_types::SiteConfig;

pub struct WindowHandlers {
    scroll: Debounced<BrowserScheduler>,
    waypoints: Debounced<BrowserScheduler>,
    resize: Debounced<BrowserScheduler>,
}

impl WindowHandlers {
    pub fn cancel(&self) {
        self.scroll.cancel();
        self.waypoints.cancel();
        self.resize.cancel();
    }
}

fn update_header(selector: &str, threshold_px: f64) {
    let Some(header) = dom::query(selector) else {
        return;
    };
    let scroll_y = dom::window().and_then(|w| w.scroll_y().map_err(dom::js_err("scroll")));
    match scroll_y {
        Ok(y) => dom::toggle_class(&header, "scrolled", header_scrolled(y, threshold_px)),
        Err(err) => tracing::warn!(%err, "could not read scroll position"),
    }
}

/// Adds `et-animated` to every waypoint in the upper part of the viewport.
pub fn waypoint_pass(selector: &str, ratio: f64) {
    let waypoints = dom::query_all(selector);
    if waypoints.is_empty() {
        return;
    }
    let viewport = dom::window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .or_else(|| {
            dom::document()
                .ok()
                .and_then(|d| d.document_element())
                .map(|el| f64::from(el.client_height()))
        })
        .unwrap_or(0.0);
    let tops: Vec<f64> = waypoints
        .iter()
        .map(|w| w.get_bounding_client_rect().top())
        .collect();
    for i in due_waypoints(&tops, viewport, ratio) {
        dom::add_class(&waypoints[i], "et-animated");
    }
}

pub fn bind(config: &SiteConfig, listeners: &mut ListenerSet) -> Result<WindowHandlers, SiteError> {
    let window = dom::window()?;
    let scroll_cfg = config.scroll.clone();
    let header = config.selectors.header.clone();
    let waypoint = config.selectors.waypoint.clone();

    let offset = scroll_cfg.header_offset_px;
    let scroll = Debounced::trailing(BrowserScheduler, scroll_cfg.scroll_quiet_ms, move || {
        update_header(&header, offset)
    });

    let ratio = scroll_cfg.waypoint_viewport_ratio;
    let pass_selector = waypoint.clone();
    let waypoints = Debounced::trailing(BrowserScheduler, scroll_cfg.waypoint_quiet_ms, move || {
        waypoint_pass(&pass_selector, ratio)
    });

    let resize = Debounced::trailing(BrowserScheduler, scroll_cfg.resize_quiet_ms, || {
        tracing::trace!("window resized");
    });

    {
        let scroll = scroll.clone();
        let waypoints = waypoints.clone();
        listeners.on(&window, "scroll", move |_| {
            scroll.call();
            waypoints.call();
        })?;
    }
    {
        let resize = resize.clone();
        listeners.on(&window, "resize", move |_| resize.call())?;
    }

    if dom::ready_state() == "complete" {
        waypoint_pass(&waypoint, ratio);
    } else {
        listeners.on(&window, "load", move |_| waypoint_pass(&waypoint, ratio))?;
    }

    Ok(WindowHandlers {
        scroll,
        waypoints,
        resize,
    })
}
