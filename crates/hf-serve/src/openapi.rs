use crate::routes::events::EventsQuery;
use crate::routes::webhook::{AckStatus, WebhookAck};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use hf_core::types::{Action, EventId, EventRecord};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::webhook::receive,
        crate::routes::events::list_events
    ),
    components(schemas(EventRecord, EventId, Action, EventsQuery, WebhookAck, AckStatus))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn router() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
