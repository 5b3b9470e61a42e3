//! Typed ID definitions for the entities this service tracks.

pub use super::id::Id;

/// Marker type for emails (one send or scheduled send).
pub struct Email;

/// Marker type for jobs held by the scheduler.
pub struct Job;

/// Correlates a send, its delivery record and its tracking pixel.
pub type EmailId = Id<Email>;

pub type JobId = Id<Job>;
