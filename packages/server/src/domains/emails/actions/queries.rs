//! Status lookups

use crate::common::EmailId;
use crate::domains::emails::{DeliveryRecord, EmailError, StatusStore};

/// Look up a record by the identifier as given on the wire.
///
/// A malformed identifier is reported the same way as an unknown one.
pub fn email_status(store: &StatusStore, raw_id: &str) -> Result<DeliveryRecord, EmailError> {
    let email_id =
        EmailId::parse(raw_id).map_err(|_| EmailError::NotFound(raw_id.to_string()))?;
    store.get(&email_id)
}
