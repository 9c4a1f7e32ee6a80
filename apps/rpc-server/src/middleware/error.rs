//! RPC error responses.
//!
//! A failed call is reported twice: the body is `{"success": false,
//! "message": ...}` and the HTTP status is non-2xx. The message is never
//! empty.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use quill_core::PostError;
use quill_shared::StatusResponse;
use thiserror::Error;

/// Transport-level error type.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Post(#[from] PostError),

    /// Request body could not be decoded.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl ResponseError for RpcError {
    fn status_code(&self) -> StatusCode {
        match self {
            RpcError::Post(PostError::InvalidIdentifier) => StatusCode::BAD_REQUEST,
            RpcError::Post(PostError::NotFound { .. }) => StatusCode::NOT_FOUND,
            RpcError::Post(PostError::InvalidTarget) => StatusCode::PRECONDITION_FAILED,
            RpcError::Post(PostError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            RpcError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(StatusResponse::failure(self.to_string()))
    }
}

/// JSON extractor config whose decode failures use the RPC failure body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        tracing::warn!(error = %err, "error in decoding request");
        RpcError::MalformedRequest(err.to_string()).into()
    })
}

/// Result type alias for handlers.
pub type RpcResult<T> = Result<T, RpcError>;
