//! Typed site configuration.
//!
//! Every field has a default matching the production markup, so a partial
//! JSON object only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(String),
    #[error("enquiry endpoint must not be empty")]
    EmptyEndpoint,
    #[error("whatsapp number must be digits only, got {0:?}")]
    InvalidWhatsAppNumber(String),
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("reveal threshold must lie in 0..=1, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("selector for {0} must not be empty")]
    EmptySelector(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Boot automatically once the document is parsed. Pages that call
    /// `boot` themselves set this to `false`.
    pub autostart: bool,
    pub enquiry_endpoint: String,
    pub success_banner_ms: u32,
    pub whatsapp: WhatsAppConfig,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub selectors: Selectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            autostart: true,
            enquiry_endpoint: "/submit-enquiry".to_owned(),
            success_banner_ms: 5_000,
            whatsapp: WhatsAppConfig::default(),
            carousel: CarouselConfig::default(),
            reveal: RevealConfig::default(),
            scroll: ScrollConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WhatsAppConfig {
    pub contact_name: String,
    /// International number without `+` or separators, as `wa.me` expects.
    pub number: String,
    /// Lower-cased path suffixes that identify the home page, besides `/`.
    pub home_paths: Vec<String>,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            contact_name: "Neville".to_owned(),
            number: "27616219784".to_owned(),
            home_paths: vec!["/index.html".to_owned()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CarouselConfig {
    pub default_interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { default_interval_ms: 5_000 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_offset_px: f64,
    pub scroll_quiet_ms: u32,
    pub waypoint_quiet_ms: u32,
    pub resize_quiet_ms: u32,
    pub waypoint_viewport_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 100.0,
            scroll_quiet_ms: 10,
            waypoint_quiet_ms: 100,
            resize_quiet_ms: 250,
            waypoint_viewport_ratio: 0.75,
        }
    }
}

/// The markup contract: classes, ids and data attributes the script binds to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Selectors {
    pub menu_trigger: String,
    pub menu_panel: String,

    pub contact_form_id: String,
    pub form_status_id: String,

    pub anchor_links: String,

    pub carousel_root: String,
    pub carousel_container: String,
    pub carousel_slide: String,
    pub carousel_indicator: String,
    pub carousel_interval_attr: String,

    pub filter_bar: String,
    pub filter_button: String,
    pub filter_card: String,
    pub filter_section: String,
    pub section_card: String,
    pub card_category_attr: String,
    pub button_filter_attr: String,

    pub reveal_targets: String,

    pub chat_button_id: String,
    pub chat_float: String,

    pub header: String,
    pub waypoint: String,

    pub popup_triggers: String,
    pub newsletter_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_trigger: ".mobile_menu_bar".to_owned(),
            menu_panel: ".mobile_nav".to_owned(),
            contact_form_id: "contactForm".to_owned(),
            form_status_id: "formStatus".to_owned(),
            anchor_links: "a[href*=\"#\"]".to_owned(),
            carousel_root: ".hero-carousel".to_owned(),
            carousel_container: ".carousel".to_owned(),
            carousel_slide: ".carousel-slide".to_owned(),
            carousel_indicator: ".carousel-indicators .dot".to_owned(),
            carousel_interval_attr: "data-interval".to_owned(),
            filter_bar: ".category-filter".to_owned(),
            filter_button: ".filter-btn".to_owned(),
            filter_card: ".tours-content .tour-card".to_owned(),
            filter_section: ".tours-content .tour-category".to_owned(),
            section_card: ".tour-card".to_owned(),
            card_category_attr: "data-category".to_owned(),
            button_filter_attr: "data-filter".to_owned(),
            reveal_targets: ".hero-image, .feature-img, .tour-img, .about-img, .team-img, \
                             .value-img, .et_pb_image_wrap img"
                .to_owned(),
            chat_button_id: "whatsapp-chat-button".to_owned(),
            chat_float: ".whatsapp-float".to_owned(),
            header: ".et-l--header".to_owned(),
            waypoint: ".et-waypoint".to_owned(),
            popup_triggers: ".popmake-6259".to_owned(),
            newsletter_id: "newsletter".to_owned(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enquiry_endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        let number = &self.whatsapp.number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsAppNumber(number.clone()));
        }
        if self.success_banner_ms == 0 {
            return Err(ConfigError::ZeroDuration("success_banner_ms"));
        }
        if self.carousel.default_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("carousel.default_interval_ms"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.reveal.threshold));
        }
        let s = &self.selectors;
        for (name, value) in [
            ("contact_form_id", &s.contact_form_id),
            ("form_status_id", &s.form_status_id),
            ("carousel_slide", &s.carousel_slide),
            ("filter_button", &s.filter_button),
            ("reveal_targets", &s.reveal_targets),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptySelector(name));
            }
        }
        Ok(())
    }
}
