//! Server dependencies (using traits for testability)
//!
//! `ServerDeps` is built once in the composition root and shared with route
//! handlers and scheduled jobs. There is no global state.

use anyhow::{Context, Result};
use async_trait::async_trait;
use plunk::{PlunkService, SendEmailRequest};
use std::sync::Arc;
use tracing::warn;

use crate::domains::emails::{DeliveryClient, StatusStore};
use crate::kernel::jobs::{JobScheduler, SchedulerConfig};
use crate::kernel::{BaseEmailProvider, ProviderResponse};

// =============================================================================
// PlunkService Adapter (implements BaseEmailProvider trait)
// =============================================================================

/// Wrapper around PlunkService that implements BaseEmailProvider trait
pub struct PlunkAdapter(pub Arc<PlunkService>);

impl PlunkAdapter {
    pub fn new(service: Arc<PlunkService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseEmailProvider for PlunkAdapter {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<ProviderResponse> {
        let request = SendEmailRequest::html(to, subject, html);
        let reply = self
            .0
            .send_email(&request)
            .await
            .context("Failed to reach Plunk")?;

        if !reply.is_success() {
            warn!(status = reply.status, to = %to, "Plunk rejected send request");
        }

        Ok(reply.body)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies shared by route handlers and scheduled jobs
#[derive(Clone)]
pub struct ServerDeps {
    pub delivery: Arc<DeliveryClient>,
    pub store: Arc<StatusStore>,
    pub scheduler: Arc<JobScheduler>,
}

impl ServerDeps {
    /// Create new ServerDeps with an empty store and a stopped scheduler
    pub fn new(
        provider: Arc<dyn BaseEmailProvider>,
        tracking_base_url: impl Into<String>,
        scheduler_config: SchedulerConfig,
    ) -> Self {
        Self {
            delivery: Arc::new(DeliveryClient::new(provider, tracking_base_url)),
            store: Arc::new(StatusStore::new()),
            scheduler: Arc::new(JobScheduler::new(scheduler_config)),
        }
    }
}
