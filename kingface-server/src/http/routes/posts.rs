//! Post and like endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kingface_core::{ContentKind, MediaAttachment, Page, PageParams, PostBody};

use crate::db::repos::{Like, LikeRepo, Post, PostRepo};
use crate::http::error::ApiError;
use crate::http::extractors::CurrentAccount;
use crate::http::server::AppState;

/// Create post request
#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Base64 media payload; empty means no media
    #[serde(default)]
    pub media_data: String,
}

fn default_content_type() -> String {
    "text".to_owned()
}

/// Post response
#[derive(Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub content_type: String,
    pub media_url: String,
    pub media_hash: String,
    pub likes_count: i64,
    pub comments_count: i64,
    pub is_nft: bool,
    pub nft_mint: String,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            author_id: p.author_id,
            author_username: p.author_username,
            content: p.content,
            content_type: p.content_type,
            media_url: p.media_url,
            media_hash: p.media_hash,
            likes_count: p.likes_count,
            comments_count: p.comments_count,
            is_nft: p.is_nft,
            nft_mint: p.nft_mint,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Like request
#[derive(Deserialize)]
pub struct LikeRequest {
    pub post_id: Uuid,
}

/// Like settlement response
#[derive(Serialize)]
pub struct LikeResultResponse {
    pub message: &'static str,
    pub kftl_spent: f64,
}

/// Like record response
#[derive(Serialize)]
pub struct LikeResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub kftl_spent: f64,
    pub created_at: String,
}

impl From<Like> for LikeResponse {
    fn from(l: Like) -> Self {
        Self {
            id: l.id,
            post_id: l.post_id,
            user_id: l.user_id,
            kftl_spent: l.kftl_spent,
            created_at: l.created_at.to_rfc3339(),
        }
    }
}

/// POST /posts - create a post as the authenticated account
async fn create_post(
    State(state): State<Arc<AppState>>,
    CurrentAccount(account): CurrentAccount,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let body = PostBody::new(&req.content)?;
    let kind = ContentKind::parse(&req.content_type)?;

    let media = if req.media_data.is_empty() {
        None
    } else {
        Some(MediaAttachment::from_encoded(
            &req.media_data,
            &state.config.media_gateway,
        )?)
    };

    let post = PostRepo::new(&state.pool)
        .create(&account, body, kind, media)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// GET /posts/feed - global feed, newest first
async fn get_feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let page = Page::from(params);
    let posts = PostRepo::new(&state.pool).feed(page).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /posts/{post_id} - single post
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = PostRepo::new(&state.pool).get(post_id).await?;
    Ok(Json(post.into()))
}

/// POST /posts/like - spend KFTL to like a post
async fn like_post(
    State(state): State<Arc<AppState>>,
    CurrentAccount(account): CurrentAccount,
    Json(req): Json<LikeRequest>,
) -> Result<Json<LikeResultResponse>, ApiError> {
    let like = LikeRepo::new(&state.pool)
        .settle(&account, req.post_id)
        .await?;

    Ok(Json(LikeResultResponse {
        message: "Post liked successfully",
        kftl_spent: like.kftl_spent,
    }))
}

/// GET /posts/{post_id}/likes - all likes for a post
async fn list_post_likes(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<LikeResponse>>, ApiError> {
    let likes = LikeRepo::new(&state.pool).list_for_post(post_id).await?;
    Ok(Json(likes.into_iter().map(LikeResponse::from).collect()))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/feed", get(get_feed))
        .route("/posts/like", post(like_post))
        .route("/posts/{post_id}", get(get_post))
        .route("/posts/{post_id}/likes", get(list_post_likes))
}
