//! Post use-case service.
//!
//! Everything except `update_post` is a straight pass-through to the
//! repository. Updates are only attempted against a post that is currently
//! live; the check and the write are not atomic, so a concurrent delete in
//! between surfaces as the repository's persistence error.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{CreatePostRequest, Post, UpdatePostRequest};
use crate::error::{PostError, PostResult};
use crate::ports::PostRepository;

/// Orchestrates post operations over a [`PostRepository`].
#[derive(Clone)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_post(&self, request: CreatePostRequest) -> PostResult<Post> {
        self.repository.create_post(request).await
    }

    pub async fn get_post(&self, id: Uuid) -> PostResult<Post> {
        self.repository.get_post(id).await
    }

    /// Update a live post. Any failure of the existence check is reported as
    /// [`PostError::InvalidTarget`]; the underlying error is only logged.
    pub async fn update_post(&self, id: Uuid, request: UpdatePostRequest) -> PostResult<Post> {
        if let Err(e) = self.repository.get_post(id).await {
            tracing::error!(error = %e, post_id = %id, "invalid post id for update");
            return Err(PostError::InvalidTarget);
        }

        self.repository.update_post(id, request).await
    }

    pub async fn delete_post(&self, id: Uuid) -> PostResult<bool> {
        self.repository.delete_post(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    /// Repository double that keeps posts in memory and records every call.
    #[derive(Default)]
    struct RecordingRepository {
        posts: Mutex<HashMap<Uuid, Post>>,
        calls: Mutex<Vec<&'static str>>,
        fail_writes: bool,
        fail_updates: bool,
    }

    impl RecordingRepository {
        fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        fn failing_updates() -> Self {
            Self {
                fail_updates: true,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl PostRepository for RecordingRepository {
        async fn create_post(&self, request: CreatePostRequest) -> PostResult<Post> {
            self.record("create");
            if self.fail_writes {
                return Err(PostError::Persistence("error in creating post".to_string()));
            }
            let now = Utc::now();
            let post = Post {
                id: Uuid::new_v4(),
                title: request.title,
                content: request.content,
                author: request.author,
                published_on: request.published_on,
                tags: request.tags,
                is_deleted: false,
                created_at: now,
                updated_at: now,
            };
            self.posts.lock().unwrap().insert(post.id, post.clone());
            Ok(post)
        }

        async fn get_post(&self, id: Uuid) -> PostResult<Post> {
            self.record("get");
            self.posts
                .lock()
                .unwrap()
                .get(&id)
                .filter(|post| !post.is_deleted)
                .cloned()
                .ok_or(PostError::NotFound { id })
        }

        async fn update_post(&self, id: Uuid, request: UpdatePostRequest) -> PostResult<Post> {
            self.record("update");
            if self.fail_writes || self.fail_updates {
                return Err(PostError::Persistence("error in updating post".to_string()));
            }
            let mut posts = self.posts.lock().unwrap();
            let post = posts
                .get_mut(&id)
                .ok_or_else(|| PostError::Persistence("post not found".to_string()))?;
            if let Some(title) = request.title {
                post.title = title;
            }
            Ok(post.clone())
        }

        async fn delete_post(&self, id: Uuid) -> PostResult<bool> {
            self.record("delete");
            if self.fail_writes {
                return Err(PostError::Persistence("error in deleting post".to_string()));
            }
            if let Some(post) = self.posts.lock().unwrap().get_mut(&id) {
                post.is_deleted = true;
            }
            Ok(true)
        }
    }

    fn create_request(title: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: "body".to_string(),
            author: "ann".to_string(),
            published_on: Utc::now(),
            tags: vec!["rust".to_string()],
        }
    }

    fn service_with(repository: Arc<RecordingRepository>) -> PostService {
        PostService::new(repository)
    }

    #[tokio::test]
    async fn create_post_passes_through() {
        let repository = Arc::new(RecordingRepository::default());
        let service = service_with(repository.clone());

        let post = service.create_post(create_request("success post")).await.unwrap();

        assert_eq!(post.title, "success post");
        assert!(!post.is_deleted);
        assert_eq!(repository.calls(), vec!["create"]);
    }

    #[tokio::test]
    async fn create_post_propagates_repository_error() {
        let service = service_with(Arc::new(RecordingRepository::failing_writes()));

        let err = service.create_post(create_request("failed post")).await.unwrap_err();

        assert_eq!(
            err,
            PostError::Persistence("error in creating post".to_string())
        );
    }

    #[tokio::test]
    async fn get_post_after_delete_is_not_found() {
        let repository = Arc::new(RecordingRepository::default());
        let service = service_with(repository.clone());
        let post = service.create_post(create_request("doomed")).await.unwrap();

        assert!(service.delete_post(post.id).await.unwrap());
        let err = service.get_post(post.id).await.unwrap_err();

        assert_eq!(err, PostError::NotFound { id: post.id });
    }

    #[tokio::test]
    async fn update_post_checks_existence_first() {
        let repository = Arc::new(RecordingRepository::default());
        let service = service_with(repository.clone());
        let post = service.create_post(create_request("draft")).await.unwrap();

        let updated = service
            .update_post(
                post.id,
                UpdatePostRequest {
                    title: Some("final".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "final");
        assert_eq!(repository.calls(), vec!["create", "get", "update"]);
    }

    #[tokio::test]
    async fn update_failure_after_existence_check_is_propagated() {
        let repository = Arc::new(RecordingRepository::failing_updates());
        let service = service_with(repository.clone());
        let post = service.create_post(create_request("draft")).await.unwrap();

        let err = service
            .update_post(
                post.id,
                UpdatePostRequest {
                    title: Some("final".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PostError::Persistence("error in updating post".to_string())
        );
        assert_eq!(repository.calls(), vec!["create", "get", "update"]);
    }

    #[tokio::test]
    async fn update_of_missing_post_is_invalid_target() {
        let repository = Arc::new(RecordingRepository::default());
        let service = service_with(repository.clone());

        let err = service
            .update_post(Uuid::new_v4(), UpdatePostRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err, PostError::InvalidTarget);
        assert_eq!(err.to_string(), "post is not available or is deleted");
        assert_eq!(repository.calls(), vec!["get"]);
    }

    #[tokio::test]
    async fn update_of_deleted_post_never_reaches_repository_update() {
        let repository = Arc::new(RecordingRepository::default());
        let service = service_with(repository.clone());
        let post = service.create_post(create_request("gone")).await.unwrap();
        service.delete_post(post.id).await.unwrap();

        let err = service
            .update_post(post.id, UpdatePostRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err, PostError::InvalidTarget);
        assert!(!repository.calls().contains(&"update"));
    }

    #[tokio::test]
    async fn delete_post_propagates_repository_error() {
        let service = service_with(Arc::new(RecordingRepository::failing_writes()));

        let err = service.delete_post(Uuid::new_v4()).await.unwrap_err();

        assert_eq!(
            err,
            PostError::Persistence("error in deleting post".to_string())
        );
    }
}
