//! WhatsApp chat entry points.

use crate::dom;
use crate::events::ListenerSet;
use tdc_site_core::whatsapp::{deep_link, float_label, is_home_path};
use tdc_site_core::SiteError;
use tdc_site_types::{SiteConfig, WhatsAppConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement};

const FLOAT_CLASS: &str = "whatsapp-float";

/// Opens the pre-filled chat in a new browsing context.
pub fn open_chat(cfg: &WhatsAppConfig) -> Result<(), SiteError> {
    let url = deep_link(cfg);
    tracing::debug!(%url, "opening whatsapp chat");
    dom::window()?
        .open_with_url_and_target(&url, "_blank")
        .map(|_| ())
        .map_err(dom::js_err("whatsapp"))
}

fn chat_on_click(cfg: &WhatsAppConfig) -> impl FnMut() + 'static {
    let cfg = cfg.clone();
    move || {
        if let Err(err) = open_chat(&cfg) {
            tracing::warn!(%err, "could not open whatsapp chat");
        }
    }
}

/// Binds the page's own chat button, where the template has one.
pub fn bind_button(config: &SiteConfig, listeners: &mut ListenerSet) -> Result<(), SiteError> {
    let id = &config.selectors.chat_button_id;
    let button = dom::by_id(id).ok_or_else(|| SiteError::missing("whatsapp button", format!("#{id}")))?;
    listeners.on_click_prevent(&button, chat_on_click(&config.whatsapp))
}

/// Appends the floating chat button on the home page.
///
/// Returns the injected container, or `None` when this isn't the home page
/// or a floating button already exists.
pub fn inject_float(config: &SiteConfig, listeners: &mut ListenerSet) -> Result<Option<Element>, SiteError> {
    if !is_home_path(&dom::current_pathname(), &config.whatsapp) {
        return Ok(None);
    }
    if dom::query(&config.selectors.chat_float).is_some() {
        return Ok(None);
    }

    let container = dom::create_element("div")?;
    container.set_class_name(FLOAT_CLASS);
    dom::set_attr(&container, "aria-label", "Chat on WhatsApp");

    let button: HtmlButtonElement = dom::create_element("button")?
        .dyn_into()
        .map_err(|_| SiteError::dom("whatsapp", "button element has unexpected type"))?;
    button.set_type("button");
    button.set_class_name("whatsapp-button");
    let icon = dom::create_element("i")?;
    icon.set_class_name("fab fa-whatsapp");
    button
        .append_child(&icon)
        .map_err(dom::js_err("whatsapp"))?;
    button
        .append_with_str_1(&format!(" {}", float_label(&config.whatsapp.contact_name)))
        .map_err(dom::js_err("whatsapp"))?;
    container
        .append_child(&button)
        .map_err(dom::js_err("whatsapp"))?;

    listeners.on_click_prevent(&button, chat_on_click(&config.whatsapp))?;

    dom::document()?
        .body()
        .ok_or_else(|| SiteError::missing("whatsapp float", "body"))?
        .append_child(&container)
        .map_err(dom::js_err("whatsapp"))?;
    tracing::info!("floating whatsapp button injected");
    Ok(Some(container))
}
