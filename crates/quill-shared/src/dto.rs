//! Request messages and the post payload of the RPC surface.
//!
//! Ids travel as hyphenated UUID strings and are validated by the server.
//! Timestamps travel as RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `post.v1.PostService/Create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_on: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// `"tags": null` decodes like an absent list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `post.v1.PostService/Get`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRequest {
    pub id: String,
}

/// `post.v1.PostService/Update`
///
/// Absent fields are left unchanged. An empty `tags` list also means
/// "unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
}

/// `post.v1.PostService/Delete`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

/// Post fields returned by Create, Get and Update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBody {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_on: DateTime<Utc>,
    pub tags: Vec<String>,
}
