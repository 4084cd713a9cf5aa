use thiserror::Error;

/// What is wrong with the input dataset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputProblem {
    #[error("malformed structure: {0}")]
    Structure(String),

    #[error("collection `{0}` is empty")]
    Empty(&'static str),
}

/// Errors raised by the analyzer before any accumulation starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid input data: {0}")]
    InvalidInput(InputProblem),

    #[error("Invalid options: `{0}` strategy is missing")]
    InvalidOptions(&'static str),
}

impl AnalysisError {
    pub(crate) fn structure(reason: impl Into<String>) -> Self {
        Self::InvalidInput(InputProblem::Structure(reason.into()))
    }

    pub(crate) fn empty(collection: &'static str) -> Self {
        Self::InvalidInput(InputProblem::Empty(collection))
    }
}
