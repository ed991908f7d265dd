use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::error_response;
use crate::bookmarks::ValidationError;

/// Failure from the persistence layer. Carried upward unmodified; the store
/// never retries or masks these.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] libsql::Error),
    #[error("{0}")]
    Backend(String),
}

/// Every way a bookmark request can fail. Handlers return this as their error
/// channel, and the `IntoResponse` impl below is the single place where
/// failures are translated into HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Bookmark doesn't exist")]
    BookmarkNotFound,
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => {
                tracing::error!(error = %e, "rejected bookmark payload");
                error_response(StatusCode::BAD_REQUEST, &e.to_string())
            }
            ApiError::BookmarkNotFound => {
                error_response(StatusCode::NOT_FOUND, "Bookmark doesn't exist")
            }
            ApiError::Store(e) => {
                // Persistence detail goes to the log, never to the client.
                tracing::error!(error = %e, "bookmark store failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "server error")
            }
        }
    }
}
