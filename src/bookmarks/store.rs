use async_trait::async_trait;
use libsql::Connection;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::model::{Bookmark, BookmarkPatch};

/// Persistence facade for the bookmarks table. Five operations, each a single
/// round trip for the database backing. Any backing that satisfies this
/// contract can sit behind the handlers.
///
/// Absence is signalled through `Option`, not an error; callers decide what a
/// missing row means. `update` and `delete` assume the caller has already
/// checked existence.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Bookmark>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError>;

    /// Persists a fully-formed record (minted id included) and returns the
    /// stored row.
    async fn insert(&self, bookmark: Bookmark) -> Result<Bookmark, StoreError>;

    /// Merges only the supplied fields into the existing row and returns the
    /// updated row.
    async fn update(&self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, StoreError>;

    /// Removes the row with that id; a no-op when it does not exist.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

pub struct LibsqlBookmarkStore {
    conn: Connection,
}

impl LibsqlBookmarkStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn row_to_bookmark(row: &libsql::Row) -> Result<Bookmark, StoreError> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            description: row.get::<Option<String>>(3)?.unwrap_or_default(),
            rating: row.get(4)?,
        })
    }
}

#[async_trait]
impl BookmarkStore for LibsqlBookmarkStore {
    async fn get_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let query = "SELECT id, title, url, description, rating FROM bookmarks";
        let mut rows = self.conn.query(query, ()).await?;
        let mut bookmarks = Vec::new();

        while let Some(row) = rows.next().await? {
            bookmarks.push(Self::row_to_bookmark(&row)?);
        }

        Ok(bookmarks)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        let query = "SELECT id, title, url, description, rating FROM bookmarks WHERE id = ?";
        let mut rows = self.conn.query(query, libsql::params![id]).await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::row_to_bookmark(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, bookmark: Bookmark) -> Result<Bookmark, StoreError> {
        let query = r#"
            INSERT INTO bookmarks (id, title, url, description, rating)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, url, description, rating
        "#;

        let mut rows = self
            .conn
            .query(
                query,
                libsql::params![
                    bookmark.id,
                    bookmark.title,
                    bookmark.url,
                    bookmark.description,
                    bookmark.rating
                ],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Self::row_to_bookmark(&row),
            None => Err(StoreError::Backend("insert returned no row".to_string())),
        }
    }

    async fn update(&self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, StoreError> {
        let mut updates = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(title) = &patch.title {
            updates.push("title = ?");
            params.push(title.clone().into());
        }
        if let Some(url) = &patch.url {
            updates.push("url = ?");
            params.push(url.clone().into());
        }
        if let Some(description) = &patch.description {
            updates.push("description = ?");
            params.push(description.clone().into());
        }
        if let Some(rating) = patch.rating {
            updates.push("rating = ?");
            params.push(i64::from(rating).into());
        }

        if !updates.is_empty() {
            params.push(id.to_string().into());
            let query = format!("UPDATE bookmarks SET {} WHERE id = ?", updates.join(", "));
            self.conn.execute(&query, params).await?;
        }

        match self.get_by_id(id).await? {
            Some(bookmark) => Ok(bookmark),
            None => Err(StoreError::Backend(format!(
                "bookmark {id} disappeared during update"
            ))),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM bookmarks WHERE id = ?", libsql::params![id])
            .await?;
        Ok(())
    }
}

/// The service's original backing was a process-wide list; this keeps that
/// shape behind the store contract. The test suite runs against it.
#[derive(Default)]
pub struct MemoryBookmarkStore {
    bookmarks: Mutex<Vec<Bookmark>>,
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn get_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.bookmarks.lock().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        let bookmarks = self.bookmarks.lock().await;
        Ok(bookmarks.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, bookmark: Bookmark) -> Result<Bookmark, StoreError> {
        let mut bookmarks = self.bookmarks.lock().await;
        bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn update(&self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, StoreError> {
        let mut bookmarks = self.bookmarks.lock().await;
        let bookmark = bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::Backend(format!("no bookmark with id {id}")))?;

        if let Some(title) = &patch.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &patch.url {
            bookmark.url = url.clone();
        }
        if let Some(description) = &patch.description {
            bookmark.description = description.clone();
        }
        if let Some(rating) = patch.rating {
            bookmark.rating = rating;
        }

        Ok(bookmark.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.bookmarks.lock().await.retain(|b| b.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: &str, title: &str) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            title: title.to_string(),
            url: "https://www.google.com".to_string(),
            description: "Where we find everything else".to_string(),
            rating: 4,
        }
    }

    #[tokio::test]
    async fn insert_echoes_the_stored_row() {
        let store = MemoryBookmarkStore::default();
        let stored = store.insert(bookmark("a", "Google")).await.unwrap();
        assert_eq!(stored, bookmark("a", "Google"));
    }

    #[tokio::test]
    async fn get_by_id_distinguishes_absence_from_failure() {
        let store = MemoryBookmarkStore::default();
        assert_eq!(store.get_by_id("missing").await.unwrap(), None);

        store.insert(bookmark("a", "Google")).await.unwrap();
        assert!(store.get_by_id("a").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let store = MemoryBookmarkStore::default();
        store.insert(bookmark("a", "Google")).await.unwrap();

        let patch = BookmarkPatch {
            rating: Some(1),
            ..BookmarkPatch::default()
        };
        let updated = store.update("a", &patch).await.unwrap();

        assert_eq!(updated.rating, 1);
        assert_eq!(updated.title, "Google");
        assert_eq!(updated.description, "Where we find everything else");
    }

    #[tokio::test]
    async fn delete_removes_the_row_and_tolerates_absence() {
        let store = MemoryBookmarkStore::default();
        store.insert(bookmark("a", "Google")).await.unwrap();
        store.insert(bookmark("b", "MDN")).await.unwrap();

        store.delete("a").await.unwrap();
        let remaining = store.get_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b");

        store.delete("a").await.unwrap();
    }
}
