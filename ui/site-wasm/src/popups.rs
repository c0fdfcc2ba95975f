//! Placeholder popups for the enquire-now and newsletter triggers.

use crate::dom;
use crate::events::ListenerSet;
use tdc_site_core::SiteError;
use tdc_site_types::Selectors;

pub const ENQUIRE_PLACEHOLDER: &str = "Enquire Now popup would open here";
pub const NEWSLETTER_PLACEHOLDER: &str = "Newsletter signup popup would open here";

fn alert(message: &'static str) -> impl FnMut() + 'static {
    move || {
        if let Ok(window) = dom::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Returns the number of triggers bound.
pub fn bind(selectors: &Selectors, listeners: &mut ListenerSet) -> Result<usize, SiteError> {
    let mut bound = 0;
    for trigger in dom::query_all(&selectors.popup_triggers) {
        listeners.on_click_prevent(&trigger, alert(ENQUIRE_PLACEHOLDER))?;
        bound += 1;
    }
    if let Some(newsletter) = dom::by_id(&selectors.newsletter_id) {
        listeners.on_click_prevent(&newsletter, alert(NEWSLETTER_PLACEHOLDER))?;
        bound += 1;
    }
    if bound == 0 {
        return Err(SiteError::missing("popups", &selectors.popup_triggers));
    }
    Ok(bound)
}
