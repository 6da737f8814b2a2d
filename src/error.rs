use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalorieError {
    /// A calorie value shaped like scientific notation; carries the matched text.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CalorieError>;
