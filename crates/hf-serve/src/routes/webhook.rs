use crate::AppState;
use crate::middleware::correlation::{CorrelationId, DELIVERY_HEADER};
use crate::routes::error::map_error;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use hf_core::{HookError, IngestOutcome};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use utoipa::ToSchema;

pub const EVENT_HEADER: &str = "x-github-event";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Success,
    Ignored,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookAck {
    pub status: AckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl WebhookAck {
    fn from_outcome(outcome: &IngestOutcome) -> Self {
        match outcome {
            IngestOutcome::Stored(record) => Self {
                status: AckStatus::Success,
                message: "Event processed".to_string(),
                id: Some(record.id.to_string()),
            },
            IngestOutcome::Ignored => Self {
                status: AckStatus::Ignored,
                message: "Event not relevant".to_string(),
                id: None,
            },
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(receive))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/webhook",
    params(
        ("X-GitHub-Event" = Option<String>, Header, description = "Event kind, e.g. push or pull_request"),
        ("X-GitHub-Delivery" = Option<String>, Header, description = "Delivery GUID, logged only")
    ),
    request_body(content = Object, content_type = "application/json"),
    responses(
        (status = 200, body = WebhookAck),
        (status = 400, description = "Body is not JSON"),
        (status = 422, description = "Payload carries an unreadable timestamp"),
        (status = 503, description = "Event store unavailable")
    )
)]
pub(crate) async fn receive(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Deliveries without a kind fall through to the ignored branch.
    let event_kind = header_str(&headers, EVENT_HEADER).unwrap_or_default();
    let delivery = header_str(&headers, DELIVERY_HEADER);
    info!(event_kind, delivery, "webhook received");

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            let err = HookError::InvalidPayload {
                message: err.to_string(),
            };
            return map_error(&err, Some(correlation.0)).into_response();
        }
    };

    match state.hookfeed.events().ingest(event_kind, &payload) {
        Ok(outcome) => Json(WebhookAck::from_outcome(&outcome)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
