//! # Quill Shared
//!
//! Wire shapes of the `post.v1.PostService` RPC surface, shared between the
//! server and any Rust client.

pub mod dto;
pub mod response;

pub use response::{PostResponse, StatusResponse};
