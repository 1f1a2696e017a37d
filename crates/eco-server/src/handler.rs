use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use eco_store::{ContentReader, ContentWriter, InMemoryContentStore};
use eco_types::{
    validate_comment_body, Comment, CommentView, NewPost, Post, PostId, PostView, User, UserId,
};

use crate::error::{ServerError, ServerResult};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryContentStore>,
    pub default_leaderboard_limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct NewCommentRequest {
    pub user_id: UserId,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn feed_handler(State(state): State<AppState>) -> ServerResult<Json<Vec<PostView>>> {
    Ok(Json(state.store.feed()?))
}

pub async fn post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<PostView>> {
    state
        .store
        .post_by_id(&PostId::new(id.clone()))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("post {id}")))
}

/// Presence-checks the draft before it reaches the store. Malformed bodies
/// are reported through the same error envelope as blank fields.
pub async fn create_post_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Post>)> {
    let Json(draft) = payload?;
    draft.validate()?;
    let image_url = draft.image_url.clone();
    let post = state.store.create_post(draft.with_image_url(image_url))?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn create_comment_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    payload: Result<Json<NewCommentRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<CommentView>)> {
    let Json(req) = payload?;
    validate_comment_body(&req.content)?;
    let view = state
        .store
        .create_comment(&PostId::new(post_id), &req.user_id, &req.content)?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn comments_handler(State(state): State<AppState>) -> ServerResult<Json<Vec<Comment>>> {
    Ok(Json(state.store.comments()?))
}

pub async fn users_handler(State(state): State<AppState>) -> ServerResult<Json<Vec<User>>> {
    Ok(Json(state.store.users()?))
}

pub async fn leaderboard_handler(
    State(state): State<AppState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> ServerResult<Json<Vec<User>>> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(state.default_leaderboard_limit);
    Ok(Json(state.store.leaderboard(limit)?))
}
