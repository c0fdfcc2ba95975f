//! HTTP client for the enquiry endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;
use tdc_site_core::contact::EnquiryTransport;
use tdc_site_core::SiteError;
use tdc_site_types::{EnquiryPayload, EnquiryReply};
use tracing::debug;

/// Posts enquiries as JSON to a same-origin path such as `/submit-enquiry`.
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl EnquiryTransport for HttpTransport {
    async fn post(&self, payload: &EnquiryPayload) -> Result<EnquiryReply, SiteError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| SiteError::Transport(format!("encode enquiry: {e}")))?;

        let resp = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SiteError::Transport(format!("build request: {e}")))?
            .send()
            .await
            .map_err(|e| SiteError::Transport(format!("fetch error: {e}")))?;

        let status = resp.status();
        // A response arrived; an unreadable body is reported as empty.
        let body = resp.text().await.unwrap_or_default();
        debug!(status, endpoint = %self.endpoint, "enquiry response");

        Ok(EnquiryReply { status, body })
    }
}
