//! Email domain: sending, scheduling, status tracking and bulk uploads.

pub mod actions;
pub mod data;
pub mod delivery;
pub mod errors;
pub mod jobs;
pub mod models;
pub mod schedule_time;
pub mod spreadsheet;
pub mod store;

pub use delivery::{DeliveryClient, DeliveryReceipt};
pub use errors::EmailError;
pub use jobs::SendEmailJob;
pub use models::{DeliveryRecord, EmailStatus};
pub use schedule_time::parse_schedule_time;
pub use spreadsheet::{Sheet, REQUIRED_COLUMNS};
pub use store::StatusStore;
