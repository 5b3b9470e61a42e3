//! Request and response bodies for the email routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::EmailId;

#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// ISO-8601; see `parse_schedule_time`.
    pub schedule_time: String,
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub email_id: EmailId,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ScheduleEmailResponse {
    pub email_id: EmailId,
    pub message: &'static str,
    pub scheduled_for: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BulkSendResponse {
    pub message: &'static str,
    pub total_sent: usize,
}

#[derive(Debug, Serialize)]
pub struct BulkScheduleResponse {
    pub message: &'static str,
    pub total_scheduled: usize,
    pub scheduled_for: DateTime<Utc>,
}
