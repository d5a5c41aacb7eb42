use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report rows: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn write_report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteReport {
            path: path.into(),
            source,
        }
    }
}
