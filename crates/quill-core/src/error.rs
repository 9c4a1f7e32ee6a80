//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by the post repository, service and transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    /// The id on the wire is not a UUID.
    #[error("invalid post id")]
    InvalidIdentifier,

    /// No live post has this id.
    #[error("post is not available: {id}")]
    NotFound { id: Uuid },

    /// Update requested against a missing or soft-deleted post.
    #[error("post is not available or is deleted")]
    InvalidTarget,

    #[error("failed to persist post: {0}")]
    Persistence(String),
}

pub type PostResult<T> = Result<T, PostError>;
