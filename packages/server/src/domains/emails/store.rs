//! In-memory delivery status store.
//!
//! One lock guards the whole map; every operation touches a single record
//! while holding it, so a concurrent "Sent" and "Opened" write cannot
//! interleave. The last writer wins. Records are never evicted.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use super::errors::EmailError;
use super::models::{DeliveryRecord, EmailStatus};
use crate::common::EmailId;

#[derive(Debug, Default)]
pub struct StatusStore {
    records: RwLock<HashMap<EmailId, DeliveryRecord>>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `id`.
    pub fn put(&self, id: EmailId, record: DeliveryRecord) {
        debug!(email_id = %id, status = %record.status, "storing delivery record");
        self.records
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, record);
    }

    pub fn get(&self, id: &EmailId) -> Result<DeliveryRecord, EmailError> {
        self.records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| EmailError::NotFound(id.to_string()))
    }

    /// Overwrite the status of an existing record. Never creates one.
    pub fn update_status(&self, id: &EmailId, status: EmailStatus) -> Result<(), EmailError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        match records.get_mut(id) {
            Some(record) => {
                record.status = status;
                Ok(())
            }
            None => Err(EmailError::NotFound(id.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
