use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all community endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/feed", get(handler::feed_handler))
        .route("/v1/posts", post(handler::create_post_handler))
        .route("/v1/posts/:id", get(handler::post_handler))
        .route("/v1/posts/:id/comments", post(handler::create_comment_handler))
        .route("/v1/comments", get(handler::comments_handler))
        .route("/v1/users", get(handler::users_handler))
        .route("/v1/leaderboard", get(handler::leaderboard_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
