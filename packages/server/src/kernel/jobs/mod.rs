//! In-process scheduling of deferred work.
//!
//! - [`JobScheduler`] - Long-lived component with a `start`/`stop` loop
//! - [`ScheduledAction`] - The work a job runs when it fires
//! - [`PendingQueue`] - Pending jobs ordered by fire time
//!
//! # Architecture
//!
//! ```text
//! Route handler
//!     │
//!     └─► scheduler.schedule(fire_at, action)
//!             └─► PendingQueue (memory only)
//!
//! JobScheduler loop
//!     │
//!     ├─► take due jobs
//!     ├─► action.run()
//!     └─► log success / failure / panic
//! ```

mod job;
mod queue;
mod scheduler;

pub use job::{ScheduledAction, ScheduledJob};
pub use queue::PendingQueue;
pub use scheduler::{JobScheduler, SchedulerConfig};
