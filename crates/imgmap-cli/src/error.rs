//! Driver error types.

use thiserror::Error;

use imgmap_analysis::ReportError;
use imgmap_models::InvalidInputError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse regions file {path}")]
    RegionsFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Report output failed: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn regions_file(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::RegionsFile {
            path: path.into(),
            source,
        }
    }
}
