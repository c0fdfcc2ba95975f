//! DOM helpers.
//!
//! Thin wrappers over `web_sys` shared by the component bindings. Lookups
//! return `Option` so a component can skip itself when its markup is absent.

use tdc_site_core::SiteError;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::dom("dom", "no global window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?
        .document()
        .ok_or_else(|| SiteError::dom("dom", "window has no document"))
}

/// Converts a JS exception into a `SiteError` for `component`.
pub fn js_err(component: &'static str) -> impl Fn(JsValue) -> SiteError {
    move |err| SiteError::dom(component, format!("{err:?}"))
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok()?
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn collect(nl: NodeList) -> Vec<Element> {
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(el) = nl.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            v.push(el);
        }
    }
    v
}

/// All matches in document order; an invalid selector yields nothing.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .ok()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(collect)
        .unwrap_or_default()
}

pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .ok()
        .map(collect)
        .unwrap_or_default()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    let _ = el.set_attribute(name, value);
}

/// Shows or hides via inline `display`, leaving the stylesheet value intact
/// when shown.
pub fn set_displayed(el: &Element, shown: bool) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = if shown {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
    }
}

pub fn set_styles(el: &Element, props: &[(&str, &str)]) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (name, value) in props {
            let _ = style.set_property(name, value);
        }
    }
}

pub fn create_element(tag: &str) -> Result<Element, SiteError> {
    document()?
        .create_element(tag)
        .map_err(js_err("dom"))
}

/// Inserts `node` as the next sibling of `anchor`.
pub fn insert_after(anchor: &Element, node: &Element) -> Result<(), SiteError> {
    let parent = anchor
        .parent_node()
        .ok_or_else(|| SiteError::dom("dom", "anchor has no parent"))?;
    parent
        .insert_before(node, anchor.next_sibling().as_ref())
        .map(|_| ())
        .map_err(js_err("dom"))
}

pub fn insert_before(anchor: &Element, node: &Element) -> Result<(), SiteError> {
    let parent = anchor
        .parent_node()
        .ok_or_else(|| SiteError::dom("dom", "anchor has no parent"))?;
    parent
        .insert_before(node, Some(anchor))
        .map(|_| ())
        .map_err(js_err("dom"))
}

/// `document.readyState`, read reflectively.
pub fn ready_state() -> String {
    document()
        .ok()
        .and_then(|d| js_sys::Reflect::get(&d, &JsValue::from_str("readyState")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

pub fn current_pathname() -> String {
    window()
        .ok()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
