use serde::{Deserialize, Serialize};

/// A persisted bookmark row. The id is minted server-side on create and never
/// reassigned afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

/// Inbound POST payload. Everything is optional at the parsing layer so the
/// validator can report which required field is missing; unknown keys are
/// dropped by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookmark {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
}

/// Inbound PATCH payload, any subset of the four updatable fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookmark {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
}

/// A validated partial update. Only fields that are `Some` overwrite the
/// stored row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
}
