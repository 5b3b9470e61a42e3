//! Test harness for in-process integration tests.
//!
//! Each test gets its own store, scheduler and mock provider. Nothing is
//! shared between tests and no network is touched.

use trackmail_core::kernel::{MockEmailProvider, ServerDeps, TestDependencies};
use trackmail_core::server::build_app;

use super::HttpClient;

/// Origin the test router allows for CORS.
pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Router plus handles on the dependencies behind it.
///
/// The scheduler is not started. Tests fire jobs with `deps.scheduler.tick`.
///
/// # Example
///
/// ```ignore
/// let ctx = TestHarness::new();
/// let res = ctx.client().post_json("/send", json!({...})).await;
/// ctx.deps().scheduler.tick(Utc::now()).await;
/// ```
pub struct TestHarness {
    pub test: TestDependencies,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_provider(MockEmailProvider::new())
    }

    pub fn with_provider(provider: MockEmailProvider) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            test: TestDependencies::with_provider(provider),
        }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.test.deps
    }

    pub fn provider(&self) -> &MockEmailProvider {
        &self.test.provider
    }

    /// A client over a fresh router sharing this harness's dependencies.
    pub fn client(&self) -> HttpClient {
        HttpClient::new(build_app(
            self.test.deps.clone(),
            &[TEST_ORIGIN.to_string()],
        ))
    }
}
