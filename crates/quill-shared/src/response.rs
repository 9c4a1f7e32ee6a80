//! Response envelopes. Every response carries a `success` flag; failures add
//! a human-readable `message`.

use serde::{Deserialize, Serialize};

use crate::dto::PostBody;

/// Response of Create, Get and Update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub success: bool,
    #[serde(flatten)]
    pub post: Option<PostBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PostResponse {
    pub fn ok(post: PostBody) -> Self {
        Self {
            success: true,
            post: Some(post),
            message: None,
        }
    }
}

/// Response of Delete, and the body of every failed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

pub type CreateResponse = PostResponse;
pub type GetResponse = PostResponse;
pub type UpdateResponse = PostResponse;
pub type DeleteResponse = StatusResponse;

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn post_response_flattens_post_fields() {
        let response = PostResponse::ok(PostBody {
            id: "8d0f5c1e-8b5a-4f0e-9a43-5b8f1d7c2a10".to_string(),
            title: "success post".to_string(),
            content: "body".to_string(),
            author: "ann".to_string(),
            published_on: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            tags: vec!["rust".to_string()],
        });

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["title"], "success post");
        assert_eq!(json["published_on"], "2024-05-01T12:00:00Z");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn failure_always_carries_message() {
        let json = serde_json::to_value(StatusResponse::failure("invalid post id")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "invalid post id" })
        );
    }
}
