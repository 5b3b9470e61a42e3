//! Scheduled job model.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::JobId;

/// Work bound to a scheduled job.
///
/// Implementations carry everything they need to run; the scheduler only
/// knows when to call them.
#[async_trait]
pub trait ScheduledAction: Send + Sync {
    /// Short label used in logs.
    fn job_type(&self) -> &'static str {
        "job"
    }

    async fn run(&self) -> Result<()>;
}

/// A one-shot job waiting in the scheduler.
///
/// Jobs are ordered by `(fire_at, seq)`: earliest fire time first, then the
/// order in which they were scheduled.
#[derive(Clone)]
pub struct ScheduledJob {
    pub id: JobId,
    pub fire_at: DateTime<Utc>,
    pub seq: u64,
    pub action: Arc<dyn ScheduledAction>,
}

impl ScheduledJob {
    pub fn new(fire_at: DateTime<Utc>, seq: u64, action: Arc<dyn ScheduledAction>) -> Self {
        Self {
            id: JobId::new(),
            fire_at,
            seq,
            action,
        }
    }

    pub fn job_type(&self) -> &'static str {
        self.action.job_type()
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.fire_at <= now
    }
}

impl fmt::Debug for ScheduledJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledJob")
            .field("id", &self.id)
            .field("fire_at", &self.fire_at)
            .field("seq", &self.seq)
            .field("job_type", &self.job_type())
            .finish()
    }
}
