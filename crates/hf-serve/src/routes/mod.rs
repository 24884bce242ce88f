pub mod error;
pub mod events;
pub mod webhook;

use crate::middleware::correlation::correlation_middleware;
use crate::{AppState, correlation_id_from_request, openapi};
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::middleware;
use tower_http::trace::TraceLayer;
use tracing::Span;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(webhook::router(state.clone()))
        .merge(events::router(state))
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::from_fn(correlation_middleware))
}

fn request_span(request: &Request<Body>) -> Span {
    let correlation_id = correlation_id_from_request(request).unwrap_or_default();
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        correlation_id = %correlation_id,
    )
}
