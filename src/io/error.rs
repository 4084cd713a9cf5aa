use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::engine::AnalysisError;

/// IO-level errors for loading datasets and writing reports
#[derive(Error, Debug)]
pub enum IoError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}
