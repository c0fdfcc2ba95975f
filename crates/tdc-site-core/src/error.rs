use tdc_site_types::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("missing element {selector} for {component}")]
    MissingElement {
        component: &'static str,
        selector: String,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("browser call failed in {component}: {detail}")]
    Dom {
        component: &'static str,
        detail: String,
    },
    #[error("enquiry transport failed: {0}")]
    Transport(String),
}

impl SiteError {
    pub fn missing(component: &'static str, selector: impl Into<String>) -> Self {
        Self::MissingElement {
            component,
            selector: selector.into(),
        }
    }

    pub fn dom(component: &'static str, detail: impl Into<String>) -> Self {
        Self::Dom {
            component,
            detail: detail.into(),
        }
    }

    /// Missing markup is expected on pages that don't carry a component.
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}
