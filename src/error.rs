use thiserror::Error;

use crate::models::ParseWorkloadError;

#[derive(Debug, Error)]
pub enum ImtError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Workload(#[from] ParseWorkloadError),

    #[error("row {row}: {source}")]
    UnknownWorkload {
        row: usize,
        #[source]
        source: ParseWorkloadError,
    },
}

pub type Result<T> = std::result::Result<T, ImtError>;
