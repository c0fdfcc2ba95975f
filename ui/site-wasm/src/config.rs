//! Loads the site configuration.
//!
//! Defaults apply unless the page carries a JSON override in
//! `<script type="application/json" id="tdc-config">`. Partial objects merge
//! over the defaults.

use crate::dom;
use tdc_site_core::SiteError;
use tdc_site_types::{ConfigError, SiteConfig};
use wasm_bindgen::JsValue;

pub const CONFIG_ELEMENT_ID: &str = "tdc-config";

pub fn parse(text: &str) -> Result<SiteConfig, SiteError> {
    let config: SiteConfig =
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Config from the page, falling back to defaults on a malformed override.
pub fn from_page() -> SiteConfig {
    let Some(el) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let text = el.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return SiteConfig::default();
    }
    match parse(&text) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "ignoring #{CONFIG_ELEMENT_ID}, using defaults");
            SiteConfig::default()
        }
    }
}

/// Config handed over from JavaScript; `undefined`/`null` mean defaults.
pub fn from_js(value: JsValue) -> Result<SiteConfig, SiteError> {
    if value.is_undefined() || value.is_null() {
        return Ok(SiteConfig::default());
    }
    let config: SiteConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_override() {
        let cfg = parse(r#"{ "autostart": false, "success_banner_ms": 8000 }"#).unwrap();
        assert!(!cfg.autostart);
        assert_eq!(cfg.success_banner_ms, 8000);
        assert_eq!(cfg.whatsapp.contact_name, "Neville");
    }

    #[test]
    fn rejects_malformed_and_invalid() {
        assert!(matches!(
            parse("{ not json"),
            Err(SiteError::Config(ConfigError::Parse(_)))
        ));
        assert!(matches!(
            parse(r#"{ "enquiry_endpoint": "" }"#),
            Err(SiteError::Config(ConfigError::EmptyEndpoint))
        ));
    }
}
