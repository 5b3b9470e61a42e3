use thiserror::Error;

/// Errors surfaced by email operations
#[derive(Error, Debug)]
pub enum EmailError {
    /// Carries the identifier as given, which may not be a valid id.
    #[error("Email not found")]
    NotFound(String),

    #[error("Invalid schedule_time: {0}")]
    InvalidScheduleTime(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid spreadsheet: {0}")]
    InvalidSpreadsheet(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to deliver email: {0}")]
    Delivery(#[from] anyhow::Error),
}
