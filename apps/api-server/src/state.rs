//! Application state - shared across all handlers.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use scribe_core::domain::{Blog, BlogPatch, NewBlog};
use scribe_core::error::RepoError;
use scribe_core::ports::{BlogRepository, FileStorage};
use scribe_infra::database::{DatabaseConfig, DatabaseConnections};
use scribe_infra::storage::DiskStorage;

#[cfg(feature = "postgres")]
use scribe_infra::database::PostgresBlogRepository;

use crate::config::UploadConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub files: Arc<dyn FileStorage>,
    pub db: Option<Arc<DatabaseConnections>>,
}

/// In-memory blog repository for when the database is not configured.
///
/// Ids count up from 1 and are never reused, even after deletes.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    rows: RwLock<BTreeMap<i32, Blog>>,
    next_id: AtomicI32,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, new: NewBlog) -> Result<Blog, RepoError> {
        let now = Utc::now();
        let blog = Blog {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            title: new.title,
            content: new.content,
            image: new.image,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn list_all(&self) -> Result<Vec<Blog>, RepoError> {
        // BTreeMap iterates ascending by id; the contract wants newest first.
        Ok(self.rows.read().await.values().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Blog>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn update(&self, id: i32, patch: BlogPatch) -> Result<Option<Blog>, RepoError> {
        let mut rows = self.rows.write().await;
        let Some(blog) = rows.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(blog);
        blog.updated_at = Utc::now();
        Ok(Some(blog.clone()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<Blog>, RepoError> {
        Ok(self.rows.write().await.remove(&id))
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>, upload: &UploadConfig) -> Self {
        let files: Arc<dyn FileStorage> =
            Arc::new(DiskStorage::new(upload.dir.clone(), upload.max_bytes));

        #[cfg(feature = "postgres")]
        let (db, blogs): (Option<Arc<DatabaseConnections>>, Arc<dyn BlogRepository>) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repo = Arc::new(PostgresBlogRepository::new(conn.main.clone()));
                        (Some(conn), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryBlogRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryBlogRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, blogs): (Option<Arc<DatabaseConnections>>, Arc<dyn BlogRepository>) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            (None, Arc::new(InMemoryBlogRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self { blogs, files, db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_blog(title: &str) -> NewBlog {
        NewBlog {
            title: title.to_owned(),
            content: "body".to_owned(),
            image: None,
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repo = InMemoryBlogRepository::new();

        let first = repo.insert(new_blog("a")).await.unwrap();
        repo.delete_by_id(first.id).await.unwrap();
        let second = repo.insert(new_blog("b")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryBlogRepository::new();
        repo.insert(new_blog("a")).await.unwrap();
        repo.insert(new_blog("b")).await.unwrap();
        repo.insert(new_blog("c")).await.unwrap();

        let titles: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();

        assert_eq!(titles, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn update_refreshes_updated_at_only() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.insert(new_blog("a")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                BlogPatch {
                    title: Some("a2".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.content, created.content);
    }
}
