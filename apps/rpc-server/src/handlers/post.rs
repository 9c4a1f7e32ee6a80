//! `post.v1.PostService` handlers.
//!
//! Each handler decodes the wire request, calls the post service and encodes
//! the result. Errors are logged here with the request and returned as
//! [`RpcError`], which renders the failure body and status.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::PostError;
use quill_core::domain::{CreatePostRequest, Post, UpdatePostRequest};
use quill_shared::dto::{CreateRequest, DeleteRequest, GetRequest, PostBody, UpdateRequest};
use quill_shared::response::{CreateResponse, DeleteResponse, GetResponse, UpdateResponse};

use crate::middleware::error::{RpcError, RpcResult};
use crate::state::AppState;

fn parse_post_id(raw: &str) -> Result<Uuid, PostError> {
    Uuid::parse_str(raw).map_err(|e| {
        tracing::error!(error = %e, post_id = raw, "error in parsing post id");
        PostError::InvalidIdentifier
    })
}

fn to_post_body(post: Post) -> PostBody {
    PostBody {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author,
        published_on: post.published_on,
        tags: post.tags,
    }
}

/// POST /post.v1.PostService/Create
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateRequest>,
) -> RpcResult<HttpResponse> {
    let request = body.into_inner();
    let entity_request = CreatePostRequest {
        title: request.title.clone(),
        content: request.content.clone(),
        author: request.author.clone(),
        published_on: request.published_on,
        tags: request.tags.clone(),
    };

    let post = state
        .posts
        .create_post(entity_request)
        .await
        .inspect_err(|e| tracing::error!(error = %e, ?request, "error in creating post"))?;

    Ok(HttpResponse::Ok().json(CreateResponse::ok(to_post_body(post))))
}

/// POST /post.v1.PostService/Get
pub async fn get(
    state: web::Data<AppState>,
    body: web::Json<GetRequest>,
) -> RpcResult<HttpResponse> {
    let request = body.into_inner();
    let id = parse_post_id(&request.id)?;

    let post = state
        .posts
        .get_post(id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, ?request, "error in fetching post"))?;

    Ok(HttpResponse::Ok().json(GetResponse::ok(to_post_body(post))))
}

/// POST /post.v1.PostService/Update
pub async fn update(
    state: web::Data<AppState>,
    body: web::Json<UpdateRequest>,
) -> RpcResult<HttpResponse> {
    let request = body.into_inner();
    let id = parse_post_id(&request.id)?;
    let entity_request = UpdatePostRequest {
        title: request.title.clone(),
        content: request.content.clone(),
        author: request.author.clone(),
        tags: request.tags.clone(),
    };

    let post = state
        .posts
        .update_post(id, entity_request)
        .await
        .inspect_err(|e| tracing::error!(error = %e, ?request, "error in updating post"))?;

    Ok(HttpResponse::Ok().json(UpdateResponse::ok(to_post_body(post))))
}

/// POST /post.v1.PostService/Delete
pub async fn delete(
    state: web::Data<AppState>,
    body: web::Json<DeleteRequest>,
) -> RpcResult<HttpResponse> {
    let request = body.into_inner();
    let id = parse_post_id(&request.id)?;

    match state.posts.delete_post(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(DeleteResponse::ok())),
        // A negative result must never reach the wire without a message.
        Ok(false) => {
            let err = PostError::Persistence(format!("post {id} was not deleted"));
            tracing::error!(error = %err, ?request, "error in deleting post");
            Err(RpcError::from(err))
        }
        Err(e) => {
            tracing::error!(error = %e, ?request, "error in deleting post");
            Err(RpcError::from(e))
        }
    }
}
