//! HTTP mapping for domain errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::emails::EmailError;

impl EmailError {
    pub fn http_code(&self) -> StatusCode {
        match self {
            EmailError::NotFound(_) => StatusCode::NOT_FOUND,
            EmailError::InvalidScheduleTime(_)
            | EmailError::MissingColumn(_)
            | EmailError::InvalidSpreadsheet(_)
            | EmailError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            EmailError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for EmailError {
    fn into_response(self) -> Response {
        let status = self.http_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "request failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
