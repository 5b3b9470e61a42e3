//! Deferred send action

use chrono::{DateTime, Utc};
use tracing::info;

use crate::common::EmailId;
use crate::domains::emails::{DeliveryRecord, SendEmailJob};
use crate::kernel::ServerDeps;

/// Record a "Scheduled" email and enqueue its send for `fire_at`.
///
/// The record is written before the job is queued, so the job always finds
/// it. Past fire times are accepted and fire on the next tick.
pub fn schedule_email(
    deps: &ServerDeps,
    to: &str,
    subject: &str,
    body: &str,
    fire_at: DateTime<Utc>,
) -> EmailId {
    let email_id = EmailId::new();
    deps.store
        .put(email_id, DeliveryRecord::scheduled(to, subject));

    let job_id = deps.scheduler.schedule(
        fire_at,
        SendEmailJob {
            delivery: deps.delivery.clone(),
            store: deps.store.clone(),
            email_id,
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        },
    );

    info!(email_id = %email_id, job_id = %job_id, fire_at = %fire_at, "email scheduled");
    email_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::emails::EmailStatus;
    use crate::kernel::{MockEmailProvider, TestDependencies};
    use chrono::Duration;

    #[tokio::test]
    async fn scheduled_then_sent_after_fire_time() {
        let test = TestDependencies::new();
        let fire_at = Utc::now() + Duration::minutes(10);

        let id = schedule_email(&test.deps, "a@example.com", "Later", "Body", fire_at);

        let record = test.deps.store.get(&id).unwrap();
        assert_eq!(record.status, EmailStatus::Scheduled);
        assert!(record.sent_at.is_none());

        assert_eq!(test.deps.scheduler.tick(Utc::now()).await, 0);
        assert_eq!(test.provider.call_count(), 0);

        assert_eq!(test.deps.scheduler.tick(fire_at).await, 1);
        let record = test.deps.store.get(&id).unwrap();
        assert_eq!(record.status, EmailStatus::Sent);
        assert!(record.sent_at.is_some());
    }

    #[tokio::test]
    async fn pixel_uses_scheduled_id() {
        let test = TestDependencies::new();
        let id = schedule_email(&test.deps, "a@example.com", "Later", "Body", Utc::now());

        test.deps.scheduler.tick(Utc::now()).await;

        let sent = test.provider.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].html.contains(&format!("/track/{}", id)));
    }

    #[tokio::test]
    async fn failed_job_leaves_record_scheduled() {
        let test = TestDependencies::with_provider(MockEmailProvider::new().failing("down"));
        let id = schedule_email(&test.deps, "a@example.com", "Later", "Body", Utc::now());

        assert_eq!(test.deps.scheduler.tick(Utc::now()).await, 1);
        assert_eq!(
            test.deps.store.get(&id).unwrap().status,
            EmailStatus::Scheduled
        );
    }
}
