//! Session API - the handle a caller opens to run reports.

use thiserror::Error;
use tracing::{debug, info};

use super::config::{DatasetSource, SessionConfig};
use crate::dataset::{to_json, DatasetError, DatasetProvider, JsonDataset, ReferenceDataset};
use crate::reports::{Report, ReportError, ReportOutput};

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

/// An open query session over one immutable dataset.
pub struct Session {
    config: SessionConfig,
    provider: Box<dyn DatasetProvider>,
}

impl Session {
    /// Open a session on the reference dataset.
    pub fn open_reference() -> Self {
        Self::with_provider(SessionConfig::default(), Box::new(ReferenceDataset::new()))
    }

    /// Open a session as described by `config`.
    pub fn open(config: SessionConfig) -> SessionResult<Self> {
        let provider: Box<dyn DatasetProvider> = match &config.dataset {
            DatasetSource::Reference => Box::new(ReferenceDataset::new()),
            DatasetSource::Json(path) => Box::new(JsonDataset::from_path(path)?),
        };
        Ok(Self::with_provider(config, provider))
    }

    /// Open a session over a caller-supplied provider.
    pub fn with_provider(config: SessionConfig, provider: Box<dyn DatasetProvider>) -> Self {
        info!(
            source = %config.dataset,
            employees = provider.all_employees().len(),
            departments = provider.all_departments().len(),
            salary_grades = provider.all_salary_grades().len(),
            "session opened"
        );
        Self { config, provider }
    }

    /// The dataset this session queries.
    pub fn provider(&self) -> &dyn DatasetProvider {
        self.provider.as_ref()
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run a report.
    pub fn run(&self, report: Report) -> SessionResult<ReportOutput> {
        let output = report.run(self.provider())?;
        debug!(report = %report, rows = output.row_count(), "report finished");
        Ok(output)
    }

    /// Look up a report by name and run it.
    pub fn run_named(&self, name: &str) -> SessionResult<ReportOutput> {
        let report: Report = name.parse()?;
        self.run(report)
    }

    /// Export the session's dataset as a JSON document.
    pub fn export_json(&self) -> SessionResult<String> {
        Ok(to_json(self.provider())?)
    }
}
