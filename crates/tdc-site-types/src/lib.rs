pub mod config;

pub use config::{
    CarouselConfig, ConfigError, RevealConfig, ScrollConfig, Selectors, SiteConfig, WhatsAppConfig,
};

use serde::{Deserialize, Serialize};

/// Body of `POST /submit-enquiry`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnquiryPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

/// What came back from the enquiry endpoint when a response arrived at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryReply {
    pub status: u16,
    pub body: String,
}

impl EnquiryReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
