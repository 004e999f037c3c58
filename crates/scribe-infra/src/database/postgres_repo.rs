//! PostgreSQL blog repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, QueryOrder, Set};

use scribe_core::domain::{Blog, BlogPatch, NewBlog};
use scribe_core::error::RepoError;
use scribe_core::ports::BlogRepository;

use super::entity::blog::{self, Entity as BlogEntity};

/// SeaORM-backed repository over the `blogs` table.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn insert(&self, new: NewBlog) -> Result<Blog, RepoError> {
        let now = Utc::now();
        let mut active: blog::ActiveModel = new.into();
        active.created_at = Set(now.into());
        active.updated_at = Set(now.into());

        let model = active.insert(&self.db).await.map_err(|e| {
            let err = e.to_string();
            if err.contains("duplicate") || err.contains("unique") {
                RepoError::Constraint(err)
            } else {
                RepoError::Query(err)
            }
        })?;

        tracing::debug!(blog_id = model.id, "inserted blog");
        Ok(model.into())
    }

    async fn list_all(&self) -> Result<Vec<Blog>, RepoError> {
        let models = BlogEntity::find()
            .order_by_desc(blog::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Blog>, RepoError> {
        let result = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, id: i32, patch: BlogPatch) -> Result<Option<Blog>, RepoError> {
        let Some(model) = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(content) = patch.content {
            active.content = Set(content);
        }
        if let Some(image) = patch.image {
            active.image = Set(Some(image));
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<Blog>, RepoError> {
        // Fetch first so the caller gets the row's last-known values back.
        let Some(model) = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let result = BlogEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            // Row vanished between the find and the delete.
            return Ok(None);
        }

        tracing::debug!(blog_id = id, "deleted blog");
        Ok(Some(model.into()))
    }
}
