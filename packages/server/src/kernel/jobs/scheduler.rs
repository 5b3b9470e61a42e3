//! Background scheduler for one-shot deferred jobs.
//!
//! The `JobScheduler` holds pending jobs in memory and runs a single loop that:
//! - Wakes every tick, or early when a job is scheduled or `stop()` is called
//! - Removes every job whose fire time has passed
//! - Runs those jobs concurrently and waits for all of them
//!
//! # Architecture
//!
//! ```text
//! schedule(fire_at, action) ──► PendingQueue ──► notify loop
//!
//! loop
//!     │
//!     ├─► tick(now): take due jobs in (fire_at, seq) order
//!     ├─► run each action, catching errors and panics
//!     └─► sleep until min(tick interval, next fire time)
//! ```
//!
//! # Example
//!
//! ```ignore
//! let scheduler = Arc::new(JobScheduler::new(SchedulerConfig::default()));
//! scheduler.start();
//! scheduler.schedule(fire_at, SendEmailJob { .. });
//! // on shutdown
//! scheduler.stop().await;
//! ```

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use futures::FutureExt;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn, Instrument};

use super::job::{ScheduledAction, ScheduledJob};
use super::queue::PendingQueue;
use crate::common::JobId;

/// Configuration for the scheduler loop.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Longest the loop sleeps between passes.
    pub tick_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl SchedulerConfig {
    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }
}

/// State shared between the scheduler handle and its loop task.
struct Shared {
    queue: Mutex<PendingQueue>,
    wake: Notify,
    next_seq: AtomicU64,
    config: SchedulerConfig,
}

/// Stop signal for one run of the loop. Each `start()` gets a fresh one, so a
/// restart never un-stops a loop that is still winding down.
#[derive(Default)]
struct RunControl {
    shutdown: AtomicBool,
    stop: Notify,
}

struct Running {
    task: JoinHandle<()>,
    control: Arc<RunControl>,
}

impl Shared {
    async fn tick(&self, now: DateTime<Utc>) -> usize {
        let due = self
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take_due(now);

        if due.is_empty() {
            return 0;
        }

        let count = due.len();
        debug!(count, "firing due jobs");
        join_all(due.into_iter().map(run_job)).await;
        count
    }

    fn sleep_duration(&self, now: DateTime<Utc>) -> Duration {
        let tick = self.config.tick_interval;
        let next = self
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .next_fire_time();

        match next {
            Some(fire_at) => (fire_at - now).to_std().unwrap_or(Duration::ZERO).min(tick),
            None => tick,
        }
    }

    async fn run_loop(self: Arc<Self>, control: Arc<RunControl>) {
        info!(
            tick_interval_ms = self.config.tick_interval.as_millis() as u64,
            "job scheduler starting"
        );

        loop {
            if control.shutdown.load(Ordering::SeqCst) {
                break;
            }

            self.tick(Utc::now()).await;

            if control.shutdown.load(Ordering::SeqCst) {
                break;
            }

            let sleep_for = self.sleep_duration(Utc::now());
            tokio::select! {
                _ = tokio::time::sleep(sleep_for) => {}
                _ = self.wake.notified() => {}
                _ = control.stop.notified() => {}
            }
        }

        info!("job scheduler stopped");
    }
}

/// Runs one job. Errors and panics are logged here and never reach the loop.
async fn run_job(job: ScheduledJob) {
    let job_id = job.id;
    let job_type = job.job_type();
    let span = tracing::info_span!("scheduled_job", job_id = %job_id, job_type = job_type);

    let result = AssertUnwindSafe(job.action.run())
        .catch_unwind()
        .instrument(span)
        .await;

    match result {
        Ok(Ok(())) => {
            info!(job_id = %job_id, job_type = job_type, "job fired");
        }
        Ok(Err(e)) => {
            error!(job_id = %job_id, job_type = job_type, error = %e, "job failed");
        }
        Err(panic) => {
            error!(
                job_id = %job_id,
                job_type = job_type,
                panic = %panic_message(&*panic),
                "job panicked"
            );
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Long-lived scheduler with an explicit `start`/`stop` lifecycle.
///
/// Jobs can be scheduled whether or not the loop is running; they fire on
/// the first tick after their fire time once it is.
///
/// A tick waits for every job it fired, so one slow send (bounded by the
/// provider timeout) delays jobs that fall due meanwhile.
pub struct JobScheduler {
    shared: Arc<Shared>,
    running: Mutex<Option<Running>>,
}

impl JobScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                queue: Mutex::new(PendingQueue::new()),
                wake: Notify::new(),
                next_seq: AtomicU64::new(0),
                config,
            }),
            running: Mutex::new(None),
        }
    }

    /// Enqueue `action` to run once at or after `fire_at`.
    ///
    /// Fire times in the past are accepted and fire on the next tick.
    pub fn schedule<A>(&self, fire_at: DateTime<Utc>, action: A) -> JobId
    where
        A: ScheduledAction + 'static,
    {
        let seq = self.shared.next_seq.fetch_add(1, Ordering::SeqCst);
        let job = ScheduledJob::new(fire_at, seq, Arc::new(action));
        let job_id = job.id;

        debug!(job_id = %job_id, job_type = job.job_type(), fire_at = %fire_at, "job scheduled");

        self.shared
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(job);
        self.shared.wake.notify_one();

        job_id
    }

    /// Run one pass over due jobs. Returns how many fired.
    pub async fn tick(&self, now: DateTime<Utc>) -> usize {
        self.shared.tick(now).await
    }

    /// Spawn the background loop. Must be called inside a tokio runtime.
    pub fn start(&self) {
        let mut running = self.running.lock().unwrap_or_else(|e| e.into_inner());
        if running.as_ref().is_some_and(|r| !r.task.is_finished()) {
            warn!("job scheduler already running");
            return;
        }

        let control = Arc::new(RunControl::default());
        let task = tokio::spawn(self.shared.clone().run_loop(control.clone()));
        *running = Some(Running { task, control });
    }

    /// Signal the loop to stop and wait for it, including any tick in progress.
    pub async fn stop(&self) {
        let running = self
            .running
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        let Some(Running { task, control }) = running else {
            return;
        };

        control.shutdown.store(true, Ordering::SeqCst);
        control.stop.notify_one();

        if let Err(e) = task.await {
            error!(error = %e, "job scheduler task ended abnormally");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(|r| !r.task.is_finished())
    }

    pub fn pending_count(&self) -> usize {
        self.shared
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl Default for JobScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
