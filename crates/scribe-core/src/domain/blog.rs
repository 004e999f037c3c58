use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog post entity. The store assigns `id` on insert and ids are never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// Filename assigned by the upload store; `None` means no cover image.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a post that does not exist yet. Id and timestamps are assigned
/// at insert time.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Partial update: only fields that are `Some` are applied.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl BlogPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.image.is_none()
    }

    /// Apply the supplied fields to `blog`, leaving the rest untouched.
    /// The caller is responsible for refreshing `updated_at`.
    pub fn apply_to(self, blog: &mut Blog) {
        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(content) = self.content {
            blog.content = content;
        }
        if let Some(image) = self.image {
            blog.image = Some(image);
        }
    }
}
