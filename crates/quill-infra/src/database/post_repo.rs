//! SeaORM post repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Set, Unchanged,
};
use uuid::Uuid;

use quill_core::domain::{CreatePostRequest, Post, UpdatePostRequest};
use quill_core::error::{PostError, PostResult};
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity, Tags};

/// Post repository backed by any SeaORM connection.
///
/// The pool is shared through an `Arc`; `DatabaseConnection` is not `Clone`
/// when SeaORM's `mock` feature is enabled.
#[derive(Clone)]
pub struct SeaOrmPostRepository {
    db: Arc<DbConn>,
}

impl SeaOrmPostRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

fn persistence(err: DbErr) -> PostError {
    PostError::Persistence(err.to_string())
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn create_post(&self, request: CreatePostRequest) -> PostResult<Post> {
        let model = post::ActiveModel::for_create(&request, Utc::now().into())
            .insert(self.db.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, ?request, "error in saving post");
                persistence(e)
            })?;

        tracing::debug!(post_id = %model.id, "Post created");
        Ok(model.into())
    }

    async fn get_post(&self, id: Uuid) -> PostResult<Post> {
        let model = PostEntity::find_live()
            .filter(post::Column::Id.eq(id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, post_id = %id, "error in fetching post");
                persistence(e)
            })?;

        match model {
            Some(model) => Ok(model.into()),
            None => {
                tracing::error!(post_id = %id, "post not found or is deleted");
                Err(PostError::NotFound { id })
            }
        }
    }

    async fn update_post(&self, id: Uuid, request: UpdatePostRequest) -> PostResult<Post> {
        let mut active = post::ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };
        if let Some(title) = &request.title {
            active.title = Set(title.clone());
        }
        if let Some(content) = &request.content {
            active.content = Set(content.clone());
        }
        if let Some(author) = &request.author {
            active.author = Set(author.clone());
        }
        if let Some(tags) = request.tags_to_apply() {
            active.tags = Set(Tags(tags.to_vec()));
        }
        active.updated_at = Set(Utc::now().into());

        let model = PostEntity::update(active)
            .filter(PostEntity::live())
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, ?request, post_id = %id, "error in updating post");
                persistence(e)
            })?;

        Ok(model.into())
    }

    async fn delete_post(&self, id: Uuid) -> PostResult<bool> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let result = PostEntity::update_many()
            .col_expr(post::Column::IsDeleted, Expr::value(true))
            .col_expr(post::Column::UpdatedAt, Expr::value(now))
            .filter(post::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, post_id = %id, "error in deleting post");
                persistence(e)
            })?;

        tracing::debug!(post_id = %id, rows = result.rows_affected, "Post soft-deleted");
        Ok(true)
    }
}
