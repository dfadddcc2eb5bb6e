use crate::infrastructure::fetch::FetchError;
use crate::infrastructure::ffmpeg::backend::BackendError;

/// Everything that can sink a generation job. `InvalidInput` maps to 400,
/// the rest to the structured 500 body; cleanup failures are log-only and
/// never appear here.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0} is not available in this environment")]
    NotAvailable(&'static str),
    #[error("download failed: {0}")]
    DownloadFailed(#[from] FetchError),
    #[error("transcode failed: {0}")]
    TranscodeFailed(String),
    #[error("output video is missing or empty")]
    OutputMissing,
    #[error("workspace error: {0}")]
    Workspace(#[from] std::io::Error),
}

impl From<BackendError> for GenerateError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::NotAvailable(tool) => GenerateError::NotAvailable(tool),
            other => GenerateError::TranscodeFailed(other.to_string()),
        }
    }
}
