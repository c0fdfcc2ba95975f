//! Tour Da Cape site scripts, compiled to WebAssembly.
//!
//! Binds the page's interactive behavior (menu, contact form, carousel,
//! filters, reveal animations, WhatsApp chat) to the DOM. Each concern lives
//! in its own module; the behavior itself lives in `tdc-site-core`.

pub mod anchors;
pub mod api;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod dom;
pub mod events;
pub mod filter;
pub mod menu;
pub mod popups;
pub mod reveal;
pub mod site;
pub mod state;
pub mod timers;
pub mod whatsapp;
pub mod window;

use site::Site;
use std::cell::RefCell;
use std::rc::Rc;
use tdc_site_core::SiteError;
use tdc_site_types::SiteConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn to_js(err: SiteError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Handle to a booted site, exposed to page scripts.
#[wasm_bindgen]
#[derive(Clone)]
pub struct SiteHandle {
    site: Rc<RefCell<Site>>,
}

impl SiteHandle {
    fn new(site: Site) -> Self {
        Self {
            site: Rc::new(RefCell::new(site)),
        }
    }
}

#[wasm_bindgen]
impl SiteHandle {
    #[wasm_bindgen(js_name = openWhatsAppChat)]
    pub fn open_whatsapp_chat(&self) -> Result<(), JsValue> {
        self.site.borrow().open_whatsapp_chat().map_err(to_js)
    }

    #[wasm_bindgen(js_name = validateContactForm)]
    pub fn validate_contact_form(&self) -> bool {
        self.site.borrow().validate_contact_form()
    }

    #[wasm_bindgen(js_name = showFormSuccess)]
    pub fn show_form_success(&self) {
        self.site.borrow().show_form_success();
    }

    #[wasm_bindgen(js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.site.borrow().is_disposed()
    }

    pub fn dispose(&self) {
        self.site.borrow_mut().dispose();
    }
}

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    let _ = tracing_wasm::try_set_as_global_default();

    if dom::ready_state() == "loading" {
        let cb = Closure::once_into_js(auto_boot);
        dom::document()
            .map_err(to_js)?
            .add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())?;
    } else {
        auto_boot();
    }
    Ok(())
}

fn auto_boot() {
    let config = config::from_page();
    if !config.autostart {
        tracing::debug!("autostart disabled, waiting for boot()");
        return;
    }
    boot_with(config);
}

fn boot_with(config: SiteConfig) -> Option<SiteHandle> {
    match Site::boot(config) {
        Ok(site) => {
            let handle = SiteHandle::new(site);
            state::set_current(handle.clone());
            Some(handle)
        }
        Err(err) => {
            tracing::error!(%err, "site failed to boot");
            None
        }
    }
}

/// Boots with an explicit configuration object (partial objects merge over
/// the defaults). Disposes any previously booted site first.
#[wasm_bindgen]
pub fn boot(config: JsValue) -> Result<SiteHandle, JsValue> {
    let config = config::from_js(config).map_err(to_js)?;
    if let Some(previous) = state::current() {
        previous.dispose();
    }
    let site = Site::boot(config).map_err(to_js)?;
    let handle = SiteHandle::new(site);
    state::set_current(handle.clone());
    Ok(handle)
}

/// The most recently booted site, if any.
#[wasm_bindgen(js_name = currentSite)]
pub fn current_site() -> Option<SiteHandle> {
    state::current()
}
