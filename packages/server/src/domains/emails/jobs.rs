//! Scheduled send job.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::actions::deliver_and_record;
use super::delivery::DeliveryClient;
use super::store::StatusStore;
use crate::common::EmailId;
use crate::kernel::jobs::ScheduledAction;

/// Sends one email under an identifier issued at schedule time, then marks
/// its record "Sent".
pub struct SendEmailJob {
    pub delivery: Arc<DeliveryClient>,
    pub store: Arc<StatusStore>,
    pub email_id: EmailId,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
impl ScheduledAction for SendEmailJob {
    fn job_type(&self) -> &'static str {
        "send_email"
    }

    async fn run(&self) -> Result<()> {
        deliver_and_record(
            &self.delivery,
            &self.store,
            self.email_id,
            &self.to,
            &self.subject,
            &self.body,
        )
        .await
    }
}
