pub mod middleware;
pub mod openapi;
pub mod routes;

use axum::Router;
use axum::http::Request;
use hf_core::Hookfeed;
use hf_db::store::DbStore;
use middleware::correlation::CorrelationId;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub const DEFAULT_EVENTS_LIMIT: u32 = hf_core::events::DEFAULT_LATEST_LIMIT;
pub const MAX_EVENTS_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct AppState {
    pub hookfeed: Arc<Hookfeed<DbStore>>,
}

impl AppState {
    pub fn new(store: DbStore) -> Self {
        Self {
            hookfeed: Arc::new(Hookfeed::new(store)),
        }
    }

    /// Hands the store back once every clone of the state has been dropped.
    pub fn into_store(self) -> Option<DbStore> {
        Arc::into_inner(self.hookfeed).map(Hookfeed::into_store)
    }
}

pub fn correlation_id_from_request<B>(request: &Request<B>) -> Option<String> {
    request
        .extensions()
        .get::<CorrelationId>()
        .map(|value| value.0.clone())
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn serve<F>(
    state: AppState,
    addr: std::net::SocketAddr,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
