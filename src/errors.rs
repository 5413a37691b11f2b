use thiserror::Error;

/// Failure of a single call across the generation boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid request: {0}")] InvalidRequest(String),
    #[error("network error: {0}")] Network(String),
    #[error("backend returned {status}: {body}")] Backend { status: u16, body: String },
    #[error("invalid response: {0}")] InvalidResponse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("a generation is already in progress")] Busy,
    #[error("task is empty")] EmptyTask,
    #[error("generation failed: {0}")] Generation(#[from] GenerationError),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerationError::InvalidResponse(e.to_string())
        } else {
            GenerationError::Network(e.to_string())
        }
    }
}
