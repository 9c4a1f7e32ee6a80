//! # Quill Core
//!
//! The domain layer of the Quill post service.
//! This crate contains the post model, the repository port and the post
//! service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{PostError, PostResult};
pub use service::PostService;
