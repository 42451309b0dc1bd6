//! Dataset loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{DeptNo, EmpNo};

/// Result type alias for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading or exporting a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// the dataset file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// two employees share an employee number
    #[error("duplicate employee number: {0}")]
    DuplicateEmployee(EmpNo),

    /// two departments share a department number
    #[error("duplicate department number: {0}")]
    DuplicateDepartment(DeptNo),

    /// two salary bands share a grade
    #[error("duplicate salary grade: {0}")]
    DuplicateGrade(u32),

    /// a required text field is empty
    #[error("empty {field} in {record} {key}")]
    EmptyField {
        record: &'static str,
        key: u32,
        field: &'static str,
    },
}

impl DatasetError {
    /// check if the document parsed but broke a dataset invariant
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            DatasetError::DuplicateEmployee(_)
                | DatasetError::DuplicateDepartment(_)
                | DatasetError::DuplicateGrade(_)
                | DatasetError::EmptyField { .. }
        )
    }
}
