use std::sync::Arc;

use axum::{Json, Router, response::IntoResponse, routing::get};
use tracing::info;

use crate::api::HealthResponse;
use crate::bookmarks::{self, BookmarkStore};

/// Shared request state. The store is injected here rather than living in a
/// module-level singleton, so any backing satisfying the contract can serve
/// the same routes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookmarkStore>,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Assembles the service router. The bookmarks resource is mounted under both
/// its original path and the evolved `/api` prefix.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(healthcheck))
        .nest("/bookmarks", bookmarks::routes())
        .nest("/api/bookmarks", bookmarks::routes())
        .with_state(state)
}
