// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseEmailProvider)

use anyhow::Result;
use async_trait::async_trait;

/// Provider reply, tagged by whether the body parsed as JSON.
pub use plunk::PlunkResponse as ProviderResponse;

// =============================================================================
// Email Provider Trait (Infrastructure - transactional email API)
// =============================================================================

#[async_trait]
pub trait BaseEmailProvider: Send + Sync {
    /// Submit one HTML email.
    ///
    /// Transport failures are errors. A reply that arrives but is not JSON is
    /// returned as `ProviderResponse::Raw`, not as an error.
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<ProviderResponse>;
}
