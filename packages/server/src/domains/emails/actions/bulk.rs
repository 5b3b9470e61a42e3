//! Bulk send and schedule actions
//!
//! Rows are processed one at a time, in order. A send failure stops the
//! batch; rows already sent keep their records.

use chrono::{DateTime, Utc};
use tracing::info;

use super::{schedule_email, send_email};
use crate::domains::emails::EmailError;
use crate::kernel::ServerDeps;

/// Send to each recipient now. Returns how many were sent.
pub async fn send_batch(
    deps: &ServerDeps,
    recipients: &[String],
    subject: &str,
    body: &str,
) -> Result<usize, EmailError> {
    let mut total = 0;
    for to in recipients {
        send_email(deps, to, subject, body).await?;
        total += 1;
    }

    info!(total, "bulk send complete");
    Ok(total)
}

/// Schedule a send to each recipient at `fire_at`. Returns how many were scheduled.
pub fn schedule_batch(
    deps: &ServerDeps,
    recipients: &[String],
    subject: &str,
    body: &str,
    fire_at: DateTime<Utc>,
) -> usize {
    for to in recipients {
        schedule_email(deps, to, subject, body, fire_at);
    }

    info!(total = recipients.len(), fire_at = %fire_at, "bulk schedule complete");
    recipients.len()
}
