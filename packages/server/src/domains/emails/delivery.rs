//! Delivery client: builds the tracked HTML payload and hands it to the provider.
//!
//! The client never touches the status store; callers record the outcome.
//! That lets the immediate and scheduled paths share one client.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::common::EmailId;
use crate::kernel::{BaseEmailProvider, ProviderResponse};

/// Result of one send
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub email_id: EmailId,
    pub provider_response: ProviderResponse,
}

pub struct DeliveryClient {
    provider: Arc<dyn BaseEmailProvider>,
    tracking_base_url: String,
}

impl DeliveryClient {
    pub fn new(provider: Arc<dyn BaseEmailProvider>, tracking_base_url: impl Into<String>) -> Self {
        let tracking_base_url = tracking_base_url.into().trim_end_matches('/').to_string();
        Self {
            provider,
            tracking_base_url,
        }
    }

    /// URL the pixel for `email_id` loads from.
    pub fn tracking_url(&self, email_id: &EmailId) -> String {
        format!("{}/track/{}", self.tracking_base_url, email_id)
    }

    /// HTML payload: the body in a paragraph, then the 1x1 tracking image.
    pub fn render_html(&self, email_id: &EmailId, body: &str) -> String {
        format!(
            "<html>\n  <body>\n    <p>{body}</p>\n    <img src=\"{src}\" width=\"1\" height=\"1\" alt=\"\" />\n  </body>\n</html>\n",
            body = body,
            src = self.tracking_url(email_id),
        )
    }

    /// Send under a freshly generated identifier.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<DeliveryReceipt> {
        self.send_with_id(EmailId::new(), to, subject, body).await
    }

    /// Send under an identifier chosen earlier (scheduled sends).
    ///
    /// Transport failures propagate. A malformed provider reply does not.
    pub async fn send_with_id(
        &self,
        email_id: EmailId,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<DeliveryReceipt> {
        let html = self.render_html(&email_id, body);

        debug!(email_id = %email_id, to = %to, "submitting email to provider");
        let provider_response = self.provider.send_html(to, subject, &html).await?;

        if provider_response.is_raw() {
            warn!(email_id = %email_id, "provider reply was not JSON");
        }

        Ok(DeliveryReceipt {
            email_id,
            provider_response,
        })
    }
}
