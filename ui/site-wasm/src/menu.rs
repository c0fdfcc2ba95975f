//! Mobile menu bindings.

use crate::dom;
use crate::events::ListenerSet;
use std::cell::RefCell;
use std::rc::Rc;
use tdc_site_core::menu::{MenuView, MobileMenu};
use tdc_site_core::SiteError;
use tdc_site_types::Selectors;
use web_sys::Element;

pub struct DomMenu {
    triggers: Vec<Element>,
    panels: Vec<Element>,
}

impl MenuView for DomMenu {
    fn set_panel_open(&self, index: usize, open: bool) {
        if let Some(panel) = self.panels.get(index) {
            dom::toggle_class(panel, "opened", open);
            dom::toggle_class(panel, "closed", !open);
        }
    }

    fn set_trigger_expanded(&self, index: usize, expanded: bool) {
        if let Some(trigger) = self.triggers.get(index) {
            dom::set_attr(trigger, "aria-expanded", if expanded { "true" } else { "false" });
        }
    }
}

/// Pairs triggers with panels by position. Returns the number of pairs.
pub fn bind(selectors: &Selectors, listeners: &mut ListenerSet) -> Result<usize, SiteError> {
    let triggers = dom::query_all(&selectors.menu_trigger);
    if triggers.is_empty() {
        return Err(SiteError::missing("mobile menu", &selectors.menu_trigger));
    }
    let panels = dom::query_all(&selectors.menu_panel);
    if panels.len() != triggers.len() {
        tracing::warn!(
            triggers = triggers.len(),
            panels = panels.len(),
            "mobile menu triggers and panels differ in count; extra triggers do nothing"
        );
    }

    let initially_open = panels.iter().map(|p| dom::has_class(p, "opened")).collect();
    let view = DomMenu {
        triggers: triggers.clone(),
        panels,
    };
    let menu = Rc::new(RefCell::new(MobileMenu::new(view, initially_open)));

    for (index, trigger) in triggers.iter().enumerate() {
        let menu = menu.clone();
        listeners.on(trigger, "click", move |_| {
            menu.borrow_mut().toggle(index);
        })?;
    }
    let pairs = menu.borrow().len();
    Ok(pairs)
}
