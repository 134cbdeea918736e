use crate::jar::PackagingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KdriveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Packaging(#[from] PackagingError),
    #[error(transparent)]
    Api(#[from] kdrive_api::ApiError),
    #[error("{0} error(s) reported")]
    Reported(usize),
}

pub type Result<T> = std::result::Result<T, KdriveError>;
