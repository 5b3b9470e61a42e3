// https://docs.useplunk.com/api-reference/transactional/send

use std::time::Duration;

pub mod models;
use reqwest::{header, Client};

pub use crate::models::{ContentType, PlunkReply, PlunkResponse, SendEmailRequest};

/// Plunk's transactional send endpoint.
pub const DEFAULT_SEND_URL: &str = "https://api.useplunk.com/v1/send";

#[derive(Debug, thiserror::Error)]
pub enum PlunkError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to Plunk failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct PlunkOptions {
    pub api_key: String,
    pub send_url: String,
    /// Upper bound for a whole request, connect through body.
    pub timeout: Duration,
}

impl PlunkOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            send_url: DEFAULT_SEND_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlunkService {
    options: PlunkOptions,
    client: Client,
}

impl PlunkService {
    pub fn new(options: PlunkOptions) -> Result<Self, PlunkError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(PlunkError::Client)?;

        Ok(Self { options, client })
    }

    pub fn send_url(&self) -> &str {
        &self.options.send_url
    }

    /// Submit one email.
    ///
    /// Connection failures and timeouts are returned as errors. Any response
    /// that arrives is returned as a [`PlunkReply`], whatever its status; a body
    /// that is not JSON comes back as [`PlunkResponse::Raw`].
    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<PlunkReply, PlunkError> {
        let response = self
            .client
            .post(&self.options.send_url)
            .bearer_auth(&self.options.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        Ok(PlunkReply {
            status: status.as_u16(),
            body: PlunkResponse::from_body(&text),
        })
    }
}
