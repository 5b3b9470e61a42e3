//! Email domain actions - business logic functions
//!
//! Actions are called directly from route handlers and scheduled jobs.
//! They own the status-store writes; the delivery client never does.

mod bulk;
mod queries;
mod schedule_email;
mod send_email;
mod track_open;

pub use bulk::{schedule_batch, send_batch};
pub use queries::email_status;
pub use schedule_email::schedule_email;
pub use send_email::{deliver_and_record, send_email};
pub use track_open::record_open;
