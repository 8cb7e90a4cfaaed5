use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("refresh rejected by server: {message}")]
    RefreshRejected { message: String },
}

pub type SdkResult<T> = Result<T, SdkError>;
