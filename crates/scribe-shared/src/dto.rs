//! Data Transfer Objects - response shapes for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as returned by the API.
///
/// `image` serializes as `null` when the post has no cover image, so clients
/// can branch on it without probing for a missing key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
