use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{AppState, DEFAULT_EVENTS_LIMIT, MAX_EVENTS_LIMIT};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use hf_core::HookError;
use hf_core::types::EventRecord;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, serde::Deserialize, ToSchema, IntoParams)]
pub struct EventsQuery {
    /// Defaults to 20, capped at 100.
    limit: Option<u32>,
}

impl EventsQuery {
    fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_EVENTS_LIMIT)
            .clamp(1, MAX_EVENTS_LIMIT)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/events",
    params(EventsQuery),
    responses(
        (status = 200, body = Vec<EventRecord>),
        (status = 400, description = "Unparseable query string"),
        (status = 503, description = "Event store unavailable")
    )
)]
pub(crate) async fn list_events(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let err = HookError::InvalidPayload {
                message: rejection.body_text(),
            };
            return map_error(&err, Some(correlation.0)).into_response();
        }
    };
    match state.hookfeed.events().latest(query.effective_limit()) {
        Ok(events) => Json(events).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
