use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - the representation returned by every read or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_on: DateTime<Utc>,
    pub tags: Vec<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_on: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update of a post.
///
/// Only `Some` scalars are applied. An empty `tags` list leaves the stored
/// tags untouched, so tags cannot be cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl UpdatePostRequest {
    /// Tags to write, if the request carries any.
    pub fn tags_to_apply(&self) -> Option<&[String]> {
        if self.tags.is_empty() {
            None
        } else {
            Some(&self.tags)
        }
    }
}
