//! HTTP handlers for the bookmarks resource.

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::sanitize::sanitize_bookmark;
use super::validate::{validate_create, validate_update};
use crate::error::ApiError;
use crate::handler::AppState;
use crate::model::{CreateBookmark, UpdateBookmark};

pub async fn list_bookmarks(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bookmarks = state.store.get_all().await?;
    let bookmarks: Vec<_> = bookmarks.into_iter().map(sanitize_bookmark).collect();

    tracing::info!(count = bookmarks.len(), "listed bookmarks");
    Ok((StatusCode::OK, Json(bookmarks)).into_response())
}

pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let bookmark = state
        .store
        .get_by_id(&id)
        .await?
        .ok_or(ApiError::BookmarkNotFound)?;

    Ok((StatusCode::OK, Json(sanitize_bookmark(bookmark))).into_response())
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateBookmark>,
) -> Result<Response, ApiError> {
    let bookmark = validate_create(payload)?;
    let stored = state.store.insert(bookmark).await?;

    tracing::info!(id = %stored.id, "bookmark created");

    // The resource is mounted under more than one base path; point at the one
    // the client used.
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), stored.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(sanitize_bookmark(stored)),
    )
        .into_response())
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBookmark>,
) -> Result<Response, ApiError> {
    if state.store.get_by_id(&id).await?.is_none() {
        return Err(ApiError::BookmarkNotFound);
    }

    let patch = validate_update(payload)?;
    state.store.update(&id, &patch).await?;

    tracing::info!(id = %id, "bookmark updated");
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    if state.store.get_by_id(&id).await?.is_none() {
        return Err(ApiError::BookmarkNotFound);
    }

    state.store.delete(&id).await?;

    tracing::info!(id = %id, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}
