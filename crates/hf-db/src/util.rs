use hf_core::error::StoreError;
use hf_core::types::Action;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid action value: {value}")]
    InvalidAction { value: String },
    #[error("invalid event id: {message}")]
    InvalidId { message: String },
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        StoreError::ReadFailure {
            message: value.to_string(),
        }
    }
}

pub fn encode_action(action: Action) -> &'static str {
    action.as_str()
}

pub fn decode_action(value: &str) -> Result<Action, DbError> {
    Action::parse(value).ok_or_else(|| DbError::InvalidAction {
        value: value.to_string(),
    })
}

pub fn write_failure(err: &rusqlite::Error) -> StoreError {
    StoreError::WriteFailure {
        message: err.to_string(),
    }
}

pub fn read_failure(err: &rusqlite::Error) -> StoreError {
    StoreError::ReadFailure {
        message: err.to_string(),
    }
}
