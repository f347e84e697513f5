//! HTTP server for the directory page.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::use_cases::RenderDirectoryUseCase;
use crate::infrastructure::diagnostics::BufferedDiagnostics;
use crate::infrastructure::image::{CacheStats, MemoryImageCache};

use super::query::parse_directory_query;
use super::view::PageRenderer;

/// Web layer errors.
#[derive(Debug, Error)]
pub enum WebError {
    /// Page template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    /// Listener could not be bound or the server stopped with an error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Shared request state.
pub struct AppState {
    directory: RenderDirectoryUseCase,
    page: PageRenderer,
    image_cache: Arc<MemoryImageCache>,
}

impl AppState {
    /// Creates the state shared by all handlers.
    #[must_use]
    pub const fn new(
        directory: RenderDirectoryUseCase,
        page: PageRenderer,
        image_cache: Arc<MemoryImageCache>,
    ) -> Self {
        Self {
            directory,
            page,
            image_cache,
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    image_cache: CacheStats,
}

/// Builds the router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(directory_page))
        .route("/cache/clear", post(clear_cache))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the directory until the process is stopped.
///
/// # Errors
/// Returns error if the address cannot be bound.
pub async fn serve(bind: &str, state: Arc<AppState>) -> Result<(), WebError> {
    let listener = TcpListener::bind(bind).await?;
    info!(address = %listener.local_addr()?, "Directory server listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn directory_page(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Html<String>, WebError> {
    let query = parse_directory_query(raw.as_deref());
    let diagnostics = BufferedDiagnostics::new();

    let page = state.directory.execute(&query, &diagnostics).await;
    let html = state.page.render(&page, &diagnostics.drain())?;

    Ok(Html(html))
}

async fn clear_cache(State(state): State<Arc<AppState>>) -> Redirect {
    state.directory.clear_caches().await;
    Redirect::to("/")
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        image_cache: state.image_cache.stats().await,
    })
}
