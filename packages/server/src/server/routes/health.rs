use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    scheduler: SchedulerHealth,
    tracked_emails: usize,
}

#[derive(Debug, Serialize)]
pub struct SchedulerHealth {
    running: bool,
    pending_jobs: usize,
}

/// Health check endpoint
///
/// Reports scheduler liveness and the size of the in-memory store. There is
/// no external dependency to probe, so this is always 200.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    let deps = &state.deps;

    Json(HealthResponse {
        status: "healthy",
        scheduler: SchedulerHealth {
            running: deps.scheduler.is_running(),
            pending_jobs: deps.scheduler.pending_count(),
        },
        tracked_emails: deps.store.len(),
    })
}
