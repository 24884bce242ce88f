use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("malformed timestamp: {value}")]
    MalformedTimestamp { value: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
    #[error("store write failed: {message}")]
    WriteFailure { message: String },
    #[error("store read failed: {message}")]
    ReadFailure { message: String },
}

#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },
}
