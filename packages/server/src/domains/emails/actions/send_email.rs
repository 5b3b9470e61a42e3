//! Immediate send action

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::common::EmailId;
use crate::domains::emails::{DeliveryClient, DeliveryRecord, EmailError, StatusStore};
use crate::kernel::ServerDeps;

/// Send now and record it as "Sent".
///
/// Nothing is recorded if the provider cannot be reached.
pub async fn send_email(
    deps: &ServerDeps,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<EmailId, EmailError> {
    let receipt = deps.delivery.send(to, subject, body).await?;
    record_sent(&deps.store, receipt.email_id, to, subject);
    Ok(receipt.email_id)
}

/// Send under an existing identifier and record it as "Sent".
///
/// Used when a scheduled job fires.
pub async fn deliver_and_record(
    delivery: &DeliveryClient,
    store: &StatusStore,
    email_id: EmailId,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<()> {
    delivery.send_with_id(email_id, to, subject, body).await?;
    record_sent(store, email_id, to, subject);
    Ok(())
}

fn record_sent(store: &StatusStore, email_id: EmailId, to: &str, subject: &str) {
    store.put(email_id, DeliveryRecord::sent(to, subject, Utc::now()));
    info!(email_id = %email_id, to = %to, "email sent");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::emails::EmailStatus;
    use crate::kernel::{MockEmailProvider, TestDependencies};

    #[tokio::test]
    async fn send_records_sent_status() {
        let test = TestDependencies::new();

        let id = send_email(&test.deps, "a@example.com", "Hi", "Hello")
            .await
            .unwrap();

        let record = test.deps.store.get(&id).unwrap();
        assert_eq!(record.status, EmailStatus::Sent);
        assert!(record.sent_at.is_some());
        assert!(test.provider.was_sent_to("a@example.com"));
    }

    #[tokio::test]
    async fn failed_send_records_nothing() {
        let test = TestDependencies::with_provider(MockEmailProvider::new().failing("timed out"));

        let err = send_email(&test.deps, "a@example.com", "Hi", "Hello")
            .await
            .unwrap_err();

        assert!(matches!(err, EmailError::Delivery(_)));
        assert!(test.deps.store.is_empty());
    }

    #[tokio::test]
    async fn deliver_and_record_overwrites_scheduled_record() {
        let test = TestDependencies::new();
        let id = EmailId::new();
        test.deps
            .store
            .put(id, DeliveryRecord::scheduled("a@example.com", "Hi"));

        deliver_and_record(
            &test.deps.delivery,
            &test.deps.store,
            id,
            "a@example.com",
            "Hi",
            "Hello",
        )
        .await
        .unwrap();

        assert_eq!(test.deps.store.get(&id).unwrap().status, EmailStatus::Sent);
    }
}
