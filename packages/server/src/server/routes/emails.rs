//! Single-email routes: send, schedule, status.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};

use crate::domains::emails::actions;
use crate::domains::emails::data::{
    EmailRequest, ScheduleEmailRequest, ScheduleEmailResponse, SendEmailResponse,
};
use crate::domains::emails::{parse_schedule_time, DeliveryRecord, EmailError};
use crate::server::app::AxumAppState;

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, EmailError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| EmailError::InvalidRequest(rejection.body_text()))
}

/// POST /send
pub async fn send_email_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, EmailError> {
    let request = json_body(payload)?;

    let email_id =
        actions::send_email(&state.deps, &request.to, &request.subject, &request.body).await?;

    Ok(Json(SendEmailResponse {
        email_id,
        message: "Email sent successfully",
    }))
}

/// POST /schedule
pub async fn schedule_email_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<ScheduleEmailRequest>, JsonRejection>,
) -> Result<Json<ScheduleEmailResponse>, EmailError> {
    let request = json_body(payload)?;
    let scheduled_for = parse_schedule_time(&request.schedule_time)?;

    let email_id = actions::schedule_email(
        &state.deps,
        &request.to,
        &request.subject,
        &request.body,
        scheduled_for,
    );

    Ok(Json(ScheduleEmailResponse {
        email_id,
        message: "Email scheduled",
        scheduled_for,
    }))
}

/// GET /status/:email_id
pub async fn email_status_handler(
    Extension(state): Extension<AxumAppState>,
    Path(email_id): Path<String>,
) -> Result<Json<DeliveryRecord>, EmailError> {
    actions::email_status(&state.deps.store, &email_id).map(Json)
}
