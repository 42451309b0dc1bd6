//! Session configuration.

use std::fmt;
use std::path::PathBuf;

/// Where a session's records come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    /// The built-in reference fixture.
    #[default]
    Reference,
    /// A JSON dataset document on disk.
    Json(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Reference => write!(f, "reference"),
            DatasetSource::Json(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Session configuration options.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Dataset to load.
    pub dataset: DatasetSource,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl SessionConfig {
    /// Create a configuration for the reference dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset from a JSON file instead.
    pub fn dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = DatasetSource::Json(path.into());
        self
    }

    /// Set the dataset source.
    pub fn dataset(mut self, source: DatasetSource) -> Self {
        self.dataset = source;
        self
    }

    /// Set verbose flag.
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference() {
        let config = SessionConfig::new();
        assert_eq!(config.dataset, DatasetSource::Reference);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new().dataset_path("emp.json").verbose(true);
        assert_eq!(config.dataset, DatasetSource::Json(PathBuf::from("emp.json")));
        assert!(config.verbose);
        assert_eq!(config.dataset.to_string(), "emp.json");

        let config = config.dataset(DatasetSource::Reference);
        assert_eq!(config.dataset.to_string(), "reference");
    }
}
