use thiserror::Error;

/// Error produced when a search cannot be carried out.
///
/// Failing to find a path is not an error: searches which exhaust
/// their frontier return an empty action sequence.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Action {action} at step {step} does not lead to a successor")]
    InvalidAction { step: usize, action: String },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
