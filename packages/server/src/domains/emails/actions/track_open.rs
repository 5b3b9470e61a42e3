//! Open-tracking action

use tracing::{debug, info};

use crate::common::EmailId;
use crate::domains::emails::{EmailStatus, StatusStore};

/// Mark the email opened if it is known. Returns whether a record changed.
///
/// Unknown and malformed identifiers are ignored; nothing is created.
pub fn record_open(store: &StatusStore, raw_id: &str) -> bool {
    let Ok(email_id) = EmailId::parse(raw_id) else {
        debug!(raw_id = %raw_id, "tracking hit with malformed id");
        return false;
    };

    match store.update_status(&email_id, EmailStatus::Opened) {
        Ok(()) => {
            info!(email_id = %email_id, "email opened");
            true
        }
        Err(_) => {
            debug!(email_id = %email_id, "tracking hit for unknown email");
            false
        }
    }
}
