//! Contact form bindings.

use crate::api::HttpTransport;
use crate::dom;
use crate::events::ListenerSet;
use crate::timers::BrowserScheduler;
use std::rc::Rc;
use tdc_site_core::contact::{ContactForm, ContactView};
use tdc_site_core::validate::{ContactFields, Field, FieldError};
use tdc_site_core::SiteError;
use tdc_site_types::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub type Form = ContactForm<DomContactForm, HttpTransport, BrowserScheduler>;

pub struct DomContactForm {
    form: HtmlFormElement,
    status: Option<Element>,
}

impl DomContactForm {
    fn control(&self, field: Field) -> Option<Element> {
        dom::query_within(&self.form, &format!("[name=\"{}\"]", field.name()))
    }

    fn value(&self, field: Field) -> String {
        let Some(el) = self.control(field) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }
}

impl ContactView for DomContactForm {
    type Banner = Element;

    fn read_fields(&self) -> ContactFields {
        ContactFields {
            name: self.value(Field::Name),
            email: self.value(Field::Email),
            phone: self.value(Field::Phone),
            interest: self.value(Field::Interest),
            message: self.value(Field::Message),
        }
    }

    fn clear_errors(&self) {
        for el in dom::query_all_within(&self.form, ".error") {
            dom::remove_class(&el, "error");
        }
        for el in dom::query_all_within(&self.form, ".field-error") {
            el.remove();
        }
    }

    fn show_field_error(&self, error: &FieldError) {
        let Some(control) = self.control(error.field) else {
            return;
        };
        dom::add_class(&control, "error");

        let Ok(msg) = dom::create_element("div") else {
            return;
        };
        msg.set_class_name("field-error");
        msg.set_text_content(Some(error.message));
        dom::set_styles(
            &msg,
            &[("color", "#d32f2f"), ("font-size", "14px"), ("margin-top", "5px")],
        );
        if let Err(err) = dom::insert_after(&control, &msg) {
            tracing::warn!(%err, field = error.field.name(), "could not place field error");
        }
    }

    fn set_status(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(text));
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn insert_banner(&self, text: &str) -> Option<Element> {
        let banner = match dom::create_element("div") {
            Ok(el) => el,
            Err(err) => {
                tracing::warn!(%err, "could not create success banner");
                return None;
            }
        };
        banner.set_class_name("form-success");
        banner.set_text_content(Some(text));
        dom::set_styles(
            &banner,
            &[
                ("background-color", "#4caf50"),
                ("color", "white"),
                ("padding", "15px"),
                ("border-radius", "4px"),
                ("margin-bottom", "20px"),
                ("text-align", "center"),
            ],
        );
        match dom::insert_before(&self.form, &banner) {
            Ok(()) => Some(banner),
            Err(err) => {
                tracing::warn!(%err, "could not place success banner");
                None
            }
        }
    }

    fn remove_banner(&self, banner: &Element) {
        if banner.parent_node().is_some() {
            banner.remove();
        }
    }
}

pub fn bind(config: &SiteConfig, listeners: &mut ListenerSet) -> Result<Rc<Form>, SiteError> {
    let selectors = &config.selectors;
    let form: HtmlFormElement = dom::by_id_typed(&selectors.contact_form_id)
        .ok_or_else(|| SiteError::missing("contact form", format!("#{}", selectors.contact_form_id)))?;
    let status = dom::by_id(&selectors.form_status_id);
    if status.is_none() {
        tracing::debug!(id = %selectors.form_status_id, "contact form has no status region");
    }

    let view = DomContactForm {
        form: form.clone(),
        status,
    };
    let controller = Rc::new(ContactForm::new(
        view,
        HttpTransport::new(config.enquiry_endpoint.clone()),
        BrowserScheduler,
        config.success_banner_ms,
    ));

    let submit = controller.clone();
    listeners.on(&form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let form = submit.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = form.submit().await;
            tracing::debug!(?outcome, "contact form submitted");
        });
    })?;

    Ok(controller)
}
