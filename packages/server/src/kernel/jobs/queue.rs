//! In-memory queue of pending jobs.
//!
//! Not durable: everything pending is lost when the process exits.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::job::ScheduledJob;

/// Pending jobs keyed by `(fire_at, seq)`, so iteration order is firing order.
#[derive(Debug, Default)]
pub struct PendingQueue {
    jobs: BTreeMap<(DateTime<Utc>, u64), ScheduledJob>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: ScheduledJob) {
        self.jobs.insert((job.fire_at, job.seq), job);
    }

    /// Remove and return every job due at `now`, in firing order.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<ScheduledJob> {
        let mut due = Vec::new();
        while let Some(entry) = self.jobs.first_entry() {
            if !entry.get().is_due(now) {
                break;
            }
            due.push(entry.remove());
        }
        due
    }

    /// Earliest pending fire time, used to shorten the loop's sleep.
    pub fn next_fire_time(&self) -> Option<DateTime<Utc>> {
        self.jobs.keys().next().map(|(fire_at, _)| *fire_at)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::jobs::ScheduledAction;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::Arc;

    struct Noop;

    #[async_trait]
    impl ScheduledAction for Noop {
        async fn run(&self) -> Result<()> {
            Ok(())
        }
    }

    fn job(fire_at: DateTime<Utc>, seq: u64) -> ScheduledJob {
        ScheduledJob::new(fire_at, seq, Arc::new(Noop))
    }

    #[test]
    fn take_due_only_returns_due_jobs() {
        let now = Utc::now();
        let mut queue = PendingQueue::new();
        queue.push(job(now - Duration::seconds(10), 0));
        queue.push(job(now + Duration::seconds(10), 1));

        let due = queue.take_due(now);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].seq, 0);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let at = Utc::now();
        let mut queue = PendingQueue::new();
        queue.push(job(at, 2));
        queue.push(job(at, 0));
        queue.push(job(at - Duration::seconds(1), 5));
        queue.push(job(at, 1));

        let order: Vec<u64> = queue.take_due(at).iter().map(|j| j.seq).collect();
        assert_eq!(order, vec![5, 0, 1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn next_fire_time_is_earliest() {
        let now = Utc::now();
        let mut queue = PendingQueue::new();
        assert_eq!(queue.next_fire_time(), None);

        queue.push(job(now + Duration::seconds(30), 0));
        queue.push(job(now + Duration::seconds(5), 1));
        assert_eq!(queue.next_fire_time(), Some(now + Duration::seconds(5)));
    }
}
