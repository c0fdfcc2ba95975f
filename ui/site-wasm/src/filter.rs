//! Tour category filter bindings.

use crate::dom;
use crate::events::ListenerSet;
use std::cell::RefCell;
use std::rc::Rc;
use tdc_site_core::filter::{CategoryFilter, FilterValue, FilterView};
use tdc_site_core::SiteError;
use tdc_site_types::Selectors;
use web_sys::Element;

pub struct DomFilter {
    buttons: Vec<Element>,
    cards: Vec<Element>,
    sections: Vec<Element>,
}

impl FilterView for DomFilter {
    fn set_card_visible(&self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get(index) {
            dom::set_displayed(card, visible);
        }
    }

    fn set_section_collapsed(&self, index: usize, collapsed: bool) {
        if let Some(section) = self.sections.get(index) {
            dom::toggle_class(section, "category-hidden", collapsed);
        }
    }

    fn set_button_active(&self, index: usize, active: bool) {
        if let Some(button) = self.buttons.get(index) {
            dom::toggle_class(button, "active", active);
            dom::set_attr(button, "aria-pressed", if active { "true" } else { "false" });
        }
    }
}

pub fn bind(selectors: &Selectors, listeners: &mut ListenerSet) -> Result<(), SiteError> {
    let bar = dom::query(&selectors.filter_bar)
        .ok_or_else(|| SiteError::missing("category filter", &selectors.filter_bar))?;

    let buttons = dom::query_all_within(&bar, &selectors.filter_button);
    let cards = dom::query_all(&selectors.filter_card);
    let sections = dom::query_all(&selectors.filter_section);

    let values: Vec<FilterValue> = buttons
        .iter()
        .map(|b| FilterValue::from_attr(b.get_attribute(&selectors.button_filter_attr).as_deref()))
        .collect();
    let categories: Vec<Option<String>> = cards
        .iter()
        .map(|c| c.get_attribute(&selectors.card_category_attr))
        .collect();
    let membership: Vec<Vec<usize>> = sections
        .iter()
        .map(|section| {
            dom::query_all_within(section, &selectors.section_card)
                .iter()
                .filter_map(|inner| cards.iter().position(|c| c == inner))
                .collect()
        })
        .collect();

    let view = DomFilter {
        buttons: buttons.clone(),
        cards,
        sections,
    };
    let filter = Rc::new(RefCell::new(CategoryFilter::new(view, values, categories, membership)));

    for (index, button) in buttons.iter().enumerate() {
        let filter = filter.clone();
        listeners.on(button, "click", move |_| filter.borrow_mut().select(index))?;
    }
    tracing::info!(buttons = buttons.len(), "category filter ready");
    Ok(())
}
