//! Bootstrapper: initialises every component in a fixed order and owns the
//! resources they acquire until `dispose`.

use crate::carousel::HeroCarousel;
use crate::contact::Form;
use crate::events::ListenerSet;
use crate::reveal::RevealBinding;
use crate::window::WindowHandlers;
use crate::{anchors, carousel, contact, filter, menu, popups, reveal, whatsapp, window};
use std::rc::Rc;
use tdc_site_core::SiteError;
use tdc_site_types::SiteConfig;
use tracing::{debug, info, warn};
use web_sys::Element;

pub struct Site {
    config: SiteConfig,
    listeners: ListenerSet,
    contact: Option<Rc<Form>>,
    carousels: Vec<HeroCarousel>,
    reveal: Option<RevealBinding>,
    window: Option<WindowHandlers>,
    chat_float: Option<Element>,
    disposed: bool,
}

/// Missing markup just means this page doesn't use the component.
fn settle<T>(component: &'static str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) if err.is_missing_markup() => {
            debug!(component, %err, "component skipped");
            None
        }
        Err(err) => {
            warn!(component, %err, "component failed to initialise");
            None
        }
    }
}

impl Site {
    pub fn boot(config: SiteConfig) -> Result<Site, SiteError> {
        config.validate()?;
        let mut listeners = ListenerSet::default();
        let selectors = &config.selectors;

        settle("mobile menu", menu::bind(selectors, &mut listeners));
        let contact = settle("contact form", contact::bind(&config, &mut listeners));
        settle("popups", popups::bind(selectors, &mut listeners));
        settle("smooth scroll", anchors::bind(selectors, &mut listeners));
        debug!("newsletter validation placeholder initialised");
        let carousels =
            settle("hero carousel", carousel::bind(&config, &mut listeners)).unwrap_or_default();
        let reveal = settle("scroll reveal", reveal::bind(&config));
        settle("whatsapp button", whatsapp::bind_button(&config, &mut listeners));
        settle("category filter", filter::bind(selectors, &mut listeners));
        let chat_float =
            settle("whatsapp float", whatsapp::inject_float(&config, &mut listeners)).flatten();
        let window = settle("window handlers", window::bind(&config, &mut listeners));

        info!(listeners = listeners.len(), "site initialised");
        Ok(Site {
            config,
            listeners,
            contact,
            carousels,
            reveal,
            window,
            chat_float,
            disposed: false,
        })
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn open_whatsapp_chat(&self) -> Result<(), SiteError> {
        whatsapp::open_chat(&self.config.whatsapp)
    }

    /// Runs the contact form validation pass; `false` without a form.
    pub fn validate_contact_form(&self) -> bool {
        self.contact.as_ref().is_some_and(|form| form.validate().is_ok())
    }

    pub fn show_form_success(&self) {
        if let Some(form) = &self.contact {
            form.show_success();
        }
    }

    /// Detaches every listener and cancels every timer and observer.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.listeners.clear();
        for carousel in &mut self.carousels {
            carousel.dispose();
        }
        self.carousels.clear();
        if let Some(form) = self.contact.take() {
            form.dispose();
        }
        self.reveal.take();
        if let Some(window) = self.window.take() {
            window.cancel();
        }
        if let Some(float) = self.chat_float.take() {
            float.remove();
        }
        self.disposed = true;
        info!("site disposed");
    }
}
