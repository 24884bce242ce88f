use axum::Json;
use axum::http::StatusCode;
use hf_core::error::{HookError, NormalizeError, StoreError};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: &'static str,
    pub message: String,
    pub correlation_id: Option<String>,
}

pub fn map_error(
    err: &HookError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        HookError::Normalize(normalize) => map_normalize_error(normalize),
        HookError::Store(store) => map_store_error(store),
        HookError::InvalidPayload { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_payload", err.to_string())
        }
    };

    if status.is_server_error() {
        error!(code, %message, correlation_id = correlation_id.as_deref(), "request failed");
    } else {
        warn!(code, %message, correlation_id = correlation_id.as_deref(), "request rejected");
    }

    (
        status,
        Json(ErrorEnvelope {
            code,
            message,
            correlation_id,
        }),
    )
}

fn map_normalize_error(err: &NormalizeError) -> (StatusCode, &'static str, String) {
    match err {
        NormalizeError::MalformedTimestamp { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "malformed_timestamp",
            err.to_string(),
        ),
    }
}

fn map_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Unavailable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            "store_unavailable",
            err.to_string(),
        ),
        StoreError::WriteFailure { .. } | StoreError::ReadFailure { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}
