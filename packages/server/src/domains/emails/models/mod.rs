pub mod delivery_record;

pub use delivery_record::{DeliveryRecord, EmailStatus};
