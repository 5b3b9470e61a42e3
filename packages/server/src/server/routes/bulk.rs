//! Spreadsheet upload routes.
//!
//! Multipart fields: `file`, `subject`, `body`, and for scheduling
//! `schedule_time`. The sheet is validated in full before anything is sent.

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Extension, Multipart,
    },
    Json,
};
use tracing::info;

use crate::domains::emails::actions;
use crate::domains::emails::data::{BulkScheduleResponse, BulkSendResponse};
use crate::domains::emails::{parse_schedule_time, EmailError, Sheet};
use crate::server::app::AxumAppState;

#[derive(Debug, Default)]
struct UploadForm {
    file_name: Option<String>,
    file: Option<Bytes>,
    subject: Option<String>,
    body: Option<String>,
    schedule_time: Option<String>,
}

impl UploadForm {
    async fn read(multipart: Result<Multipart, MultipartRejection>) -> Result<Self, EmailError> {
        let mut multipart =
            multipart.map_err(|rejection| EmailError::InvalidRequest(rejection.body_text()))?;
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    form.file_name = field.file_name().map(str::to_string);
                    form.file = Some(field.bytes().await.map_err(multipart_error)?);
                }
                "subject" => form.subject = Some(field.text().await.map_err(multipart_error)?),
                "body" => form.body = Some(field.text().await.map_err(multipart_error)?),
                "schedule_time" => {
                    form.schedule_time = Some(field.text().await.map_err(multipart_error)?)
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Recipients from the uploaded sheet.
    fn recipients(&self) -> Result<Vec<String>, EmailError> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| missing_field("file"))?;
        Sheet::from_upload(self.file_name.as_deref(), file)?.recipients()
    }

    fn text(field: &Option<String>, name: &str) -> Result<String, EmailError> {
        field.clone().ok_or_else(|| missing_field(name))
    }
}

fn multipart_error(err: MultipartError) -> EmailError {
    EmailError::InvalidRequest(err.body_text())
}

fn missing_field(name: &str) -> EmailError {
    EmailError::InvalidRequest(format!("missing form field `{}`", name))
}

/// POST /upload-and-send
pub async fn upload_and_send_handler(
    Extension(state): Extension<AxumAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BulkSendResponse>, EmailError> {
    let form = UploadForm::read(multipart).await?;
    let subject = UploadForm::text(&form.subject, "subject")?;
    let body = UploadForm::text(&form.body, "body")?;
    let recipients = form.recipients()?;

    info!(rows = recipients.len(), file = ?form.file_name, "bulk send requested");
    let total_sent = actions::send_batch(&state.deps, &recipients, &subject, &body).await?;

    Ok(Json(BulkSendResponse {
        message: "Emails sent successfully",
        total_sent,
    }))
}

/// POST /upload-and-schedule
pub async fn upload_and_schedule_handler(
    Extension(state): Extension<AxumAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BulkScheduleResponse>, EmailError> {
    let form = UploadForm::read(multipart).await?;
    let subject = UploadForm::text(&form.subject, "subject")?;
    let body = UploadForm::text(&form.body, "body")?;
    let schedule_time = UploadForm::text(&form.schedule_time, "schedule_time")?;
    let recipients = form.recipients()?;
    let scheduled_for = parse_schedule_time(&schedule_time)?;

    info!(rows = recipients.len(), file = ?form.file_name, "bulk schedule requested");
    let total_scheduled =
        actions::schedule_batch(&state.deps, &recipients, &subject, &body, scheduled_for);

    Ok(Json(BulkScheduleResponse {
        message: "Emails scheduled successfully",
        total_scheduled,
        scheduled_for,
    }))
}
