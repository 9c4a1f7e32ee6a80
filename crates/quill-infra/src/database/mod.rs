//! Database connection management and the post repository.

mod connections;
pub mod entity;
mod post_repo;

pub use connections::{DatabaseConfig, connect};
pub use post_repo::SeaOrmPostRepository;
