use std::io;
use thiserror::Error;

use crate::engine::AnalysisError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Report IO error: {0}")]
    ReportIo(#[from] IoError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl From<clap::Error> for AppError {
    fn from(err: clap::Error) -> Self {
        Self::InvalidArguments(err.render().to_string())
    }
}
