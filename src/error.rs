use std::path::PathBuf;
use thiserror::Error;

/// Failures the update pipeline reports with a fixed shape.
///
/// I/O and transport failures travel as `anyhow::Error` with context instead.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("version must start with 'v' (e.g., v1.0.5), got `{0}`")]
    InvalidVersion(String),

    #[error("formula file does not exist: {}", .0.display())]
    MissingFormula(PathBuf),

    #[error("failed to download {url}: status {status}")]
    DownloadStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}
