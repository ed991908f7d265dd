use thiserror::Error;
use uuid::Uuid;

use crate::model::{Bookmark, BookmarkPatch, CreateBookmark, UpdateBookmark};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is required")]
    MissingField(&'static str),
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("Request body must contain either 'title', 'url', 'description' or 'rating'")]
    NoFieldsToUpdate,
}

/// Checks a POST payload and, on success, returns the normalized record with
/// a freshly minted id and the description defaulted to the empty string.
///
/// The first offending field wins: title, then url, then rating. A missing,
/// null, or empty title/url all read as absent.
pub fn validate_create(payload: CreateBookmark) -> Result<Bookmark, ValidationError> {
    let title = match payload.title {
        Some(title) if !title.is_empty() => title,
        _ => return Err(ValidationError::MissingField("title")),
    };

    let url = match payload.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(ValidationError::MissingField("url")),
    };

    let description = payload.description.unwrap_or_default();

    let rating = match payload.rating {
        Some(rating) => parse_rating(rating)?,
        None => return Err(ValidationError::MissingField("rating")),
    };

    Ok(Bookmark {
        id: Uuid::new_v4().to_string(),
        title,
        url,
        description,
        rating,
    })
}

/// Checks a PATCH payload. At least one of the four recognized fields must be
/// present as a key; a supplied empty string still counts. A supplied rating
/// is range-checked the same way as on create, so the [1,5] invariant holds
/// across every write path.
pub fn validate_update(payload: UpdateBookmark) -> Result<BookmarkPatch, ValidationError> {
    if payload.title.is_none()
        && payload.url.is_none()
        && payload.description.is_none()
        && payload.rating.is_none()
    {
        return Err(ValidationError::NoFieldsToUpdate);
    }

    let rating = payload.rating.map(parse_rating).transpose()?;

    Ok(BookmarkPatch {
        title: payload.title,
        url: payload.url,
        description: payload.description,
        rating,
    })
}

// Ratings arrive as JSON numbers; anything that is not an integer in [1,5]
// gets the one fixed message.
fn parse_rating(raw: f64) -> Result<i32, ValidationError> {
    if raw.fract() != 0.0 || !(1.0..=5.0).contains(&raw) {
        return Err(ValidationError::RatingOutOfRange);
    }
    Ok(raw as i32)
}
