//! Bookmarks Module
//!
//! A self-contained CRUD resource over a single `bookmarks` table: payload
//! validation on the way in, markup sanitization on the way out, and a
//! five-operation store facade in between.
//!
//! # Features
//!
//! - One HTTP route per verb (list, get, create, patch, delete)
//! - Pluggable persistence behind the [`BookmarkStore`] trait
//! - Database migrations included
//!
//! # Usage
//!
//! ```rust,ignore
//! use bokmerke::bookmarks;
//!
//! // Get the migrations to run
//! for (name, sql) in bookmarks::migrations() {
//!     // Run migration...
//! }
//!
//! // Mount the routes
//! let app = Router::new()
//!     .nest("/bookmarks", bookmarks::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod routes;
mod sanitize;
mod store;
mod validate;

pub use routes::routes;
pub use sanitize::sanitize_bookmark;
pub use store::{BookmarkStore, LibsqlBookmarkStore, MemoryBookmarkStore};
pub use validate::{ValidationError, validate_create, validate_update};

/// Returns the migrations for the bookmarks module.
///
/// These should be run during application startup to ensure the database
/// schema is up to date.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "bookmarks_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
