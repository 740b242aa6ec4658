//! HTTP server for the status image cache
//!
//! Every request lands in a single fallback handler: the cache directory is
//! ensured, the path is validated as a status code, then the method picks
//! one of the GET, PUT or DELETE flows.

use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result};
use crate::read_through::{read_through, Lookup};
use crate::source::ImageSource;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use status_blob_store::{BlobStore, CacheKey};
use status_image_client::StatusImageClient;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared state for the HTTP server
pub struct AppState {
    pub store: BlobStore,
    pub source: Arc<dyn ImageSource>,
}

impl AppState {
    pub fn new(store: BlobStore, source: Arc<dyn ImageSource>) -> Self {
        Self { store, source }
    }

    /// State backed by the configured cache directory and upstream provider
    pub fn from_config(config: &ProxyConfig) -> Self {
        Self::new(
            BlobStore::new(&config.cache_dir),
            Arc::new(StatusImageClient::with_base_url(&config.upstream_url)),
        )
    }
}

pub type SharedState = Arc<AppState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .fallback(handle_request)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process exits
pub async fn start_server(state: SharedState, config: &ProxyConfig) -> std::io::Result<()> {
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await
}

async fn handle_request(State(state): State<SharedState>, request: Request) -> Result<Response> {
    state.store.ensure_dir().await?;

    let key = CacheKey::from_path(request.uri().path())?;

    let method = request.method().clone();
    match method {
        Method::GET => get_image(&state, key).await,
        Method::PUT => put_image(&state, key, request.into_body()).await,
        Method::DELETE => delete_image(&state, key).await,
        _ => Err(ProxyError::MethodNotAllowed),
    }
}

async fn get_image(state: &AppState, key: CacheKey) -> Result<Response> {
    let (data, cache_header) =
        match read_through(&state.store, state.source.as_ref(), &key).await? {
            Lookup::Hit(data) => (data, "HIT"),
            Lookup::FetchedAndCached(data) => (data, "MISS"),
            Lookup::Miss => return Err(ProxyError::NotFound(key)),
        };

    debug!(code = %key, cache = cache_header, size = data.len(), "Serving image");
    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            (HeaderName::from_static("x-cache"), cache_header),
        ],
        data,
    )
        .into_response())
}

async fn put_image(state: &AppState, key: CacheKey, body: Body) -> Result<Response> {
    // Collect the whole body before touching the file
    let data = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ProxyError::Internal(e.to_string()))?;

    state.store.put(&key, &data).await?;
    info!(code = %key, size = data.len(), "Saved image");

    Ok((
        StatusCode::CREATED,
        format!("Saved image for status code {}", key),
    )
        .into_response())
}

async fn delete_image(state: &AppState, key: CacheKey) -> Result<Response> {
    if !state.store.remove(&key).await? {
        return Err(ProxyError::NotFound(key));
    }

    info!(code = %key, "Deleted image");
    Ok((
        StatusCode::OK,
        format!("Deleted image for status code {}", key),
    )
        .into_response())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    ProxyError::Internal(message).into_response()
}
