use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CreatePostRequest, Post, UpdatePostRequest};
use crate::error::PostResult;

/// Post repository - sole owner of persistence semantics for posts.
///
/// Soft-deleted posts are invisible to `get_post` and `update_post`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post with a fresh id and `is_deleted = false`.
    async fn create_post(&self, request: CreatePostRequest) -> PostResult<Post>;

    /// Find a live post. Missing and soft-deleted posts both yield `NotFound`.
    async fn get_post(&self, id: Uuid) -> PostResult<Post>;

    /// Apply the present fields of `request` and refresh `updated_at`.
    /// Fails with `Persistence` when no live row matches.
    async fn update_post(&self, id: Uuid, request: UpdatePostRequest) -> PostResult<Post>;

    /// Mark a post as deleted. Idempotent: unknown or already deleted ids
    /// are not an error.
    async fn delete_post(&self, id: Uuid) -> PostResult<bool>;
}
