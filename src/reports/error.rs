//! Report errors.

use thiserror::Error;

use crate::query::QueryError;

/// Result type for report runs.
pub type ReportResult<T> = Result<T, ReportError>;

/// Report errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("unknown report: {0}")]
    UnknownReport(String),
}
