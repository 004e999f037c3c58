use async_trait::async_trait;

use crate::domain::{Blog, BlogPatch, NewBlog};
use crate::error::RepoError;

/// Blog repository - the five statements behind the CRUD surface.
///
/// Each operation is atomic at the single-statement level; no transaction
/// spans more than one of them. A missing row is an `Ok(None)`, never an
/// error.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a new post. The store assigns the id, the caller the timestamps.
    async fn insert(&self, new: NewBlog) -> Result<Blog, RepoError>;

    /// Every post, newest id first. An empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Blog>, RepoError>;

    /// Find a post by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Blog>, RepoError>;

    /// Apply the supplied fields and refresh `updated_at`.
    async fn update(&self, id: i32, patch: BlogPatch) -> Result<Option<Blog>, RepoError>;

    /// Remove the row and return it as it existed immediately before deletion.
    async fn delete_by_id(&self, id: i32) -> Result<Option<Blog>, RepoError>;
}
