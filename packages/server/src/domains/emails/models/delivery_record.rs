use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an email is in its lifecycle.
///
/// Scheduled -> Sent -> Opened. Opened may be assigned again on every open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailStatus {
    Scheduled,
    Sent,
    Opened,
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmailStatus::Scheduled => "Scheduled",
            EmailStatus::Sent => "Sent",
            EmailStatus::Opened => "Opened",
        };
        f.write_str(s)
    }
}

/// Delivery status for one email, keyed by its `EmailId` in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub to: String,
    pub subject: String,
    pub status: EmailStatus,
    /// Absent until the provider has actually been called.
    pub sent_at: Option<DateTime<Utc>>,
}

impl DeliveryRecord {
    /// Record for a send accepted for later delivery
    pub fn scheduled(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            status: EmailStatus::Scheduled,
            sent_at: None,
        }
    }

    /// Record for a send that has just been handed to the provider
    pub fn sent(to: impl Into<String>, subject: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            status: EmailStatus::Sent,
            sent_at: Some(sent_at),
        }
    }
}
