use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("{failed} step(s) failed, see log for details")]
    StepsFailed { failed: usize },

    #[error(transparent)]
    Batch(#[from] muonbatch::Error),
}
