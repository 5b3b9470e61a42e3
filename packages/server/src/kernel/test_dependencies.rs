// TestDependencies - mock implementations for testing
//
// Provides a mock email provider and a ready-made ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use super::jobs::SchedulerConfig;
use super::{BaseEmailProvider, ProviderResponse, ServerDeps};

/// Tracking base URL used by test dependencies.
pub const TEST_TRACKING_BASE_URL: &str = "https://track.test";

// =============================================================================
// Mock Email Provider
// =============================================================================

/// Arguments captured from a send call
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone)]
enum MockBehavior {
    Accept,
    RawReply(String),
    TransportFailure(String),
    Panic,
}

pub struct MockEmailProvider {
    behavior: Mutex<MockBehavior>,
    calls: Arc<Mutex<Vec<SentEmail>>>,
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmailProvider {
    /// Accepts every send with a JSON success reply.
    pub fn new() -> Self {
        Self {
            behavior: Mutex::new(MockBehavior::Accept),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reply with a body that is not JSON.
    pub fn with_raw_reply(self, text: &str) -> Self {
        *self.behavior.lock().unwrap() = MockBehavior::RawReply(text.to_string());
        self
    }

    /// Fail every send as if the provider were unreachable.
    pub fn failing(self, message: &str) -> Self {
        *self.behavior.lock().unwrap() = MockBehavior::TransportFailure(message.to_string());
        self
    }

    pub fn panicking(self) -> Self {
        *self.behavior.lock().unwrap() = MockBehavior::Panic;
        self
    }

    /// Switch to failing sends after construction.
    pub fn fail_from_now(&self, message: &str) {
        *self.behavior.lock().unwrap() = MockBehavior::TransportFailure(message.to_string());
    }

    /// Get all send calls (including failed ones)
    pub fn sent(&self) -> Vec<SentEmail> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn was_sent_to(&self, to: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c.to == to)
    }
}

#[async_trait]
impl BaseEmailProvider for MockEmailProvider {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<ProviderResponse> {
        // Record the call
        self.calls.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Accept => Ok(ProviderResponse::Structured(json!({
                "success": true,
                "emails": [{"contact": {"email": to}}]
            }))),
            MockBehavior::RawReply(text) => Ok(ProviderResponse::Raw(text)),
            MockBehavior::TransportFailure(message) => Err(anyhow::anyhow!(message)),
            MockBehavior::Panic => panic!("mock provider panicked sending to {}", to),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// ServerDeps wired to a MockEmailProvider
pub struct TestDependencies {
    pub deps: ServerDeps,
    pub provider: Arc<MockEmailProvider>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::with_provider(MockEmailProvider::new())
    }

    pub fn with_provider(provider: MockEmailProvider) -> Self {
        let provider = Arc::new(provider);
        let deps = ServerDeps::new(
            provider.clone(),
            TEST_TRACKING_BASE_URL,
            SchedulerConfig::default(),
        );
        Self { deps, provider }
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
