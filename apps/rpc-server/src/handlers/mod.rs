//! HTTP handlers and route configuration.

mod health;
mod post;

use actix_web::web;

use crate::middleware::error::json_config;

/// Scope of the post RPC methods, one `POST` route per method.
pub const POST_SERVICE_SCOPE: &str = "/post.v1.PostService";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope(POST_SERVICE_SCOPE)
                .app_data(json_config())
                .route("/Create", web::post().to(post::create))
                .route("/Get", web::post().to(post::get))
                .route("/Update", web::post().to(post::update))
                .route("/Delete", web::post().to(post::delete)),
        );
}
