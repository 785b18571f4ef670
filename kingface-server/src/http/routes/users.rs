//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use kingface_core::{Page, PageParams};

use super::posts::PostResponse;
use crate::db::repos::{Account, AccountRepo, PostRepo};
use crate::http::error::ApiError;
use crate::http::extractors::CurrentAccount;
use crate::http::server::AppState;

/// Account response
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub wallet_address: String,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub tree_level: i32,
    pub kft_balance: f64,
    pub kftl_balance: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            wallet_address: a.wallet_address,
            username: a.username,
            display_name: a.display_name,
            bio: a.bio,
            avatar_url: a.avatar_url,
            tree_level: a.tree_level,
            kft_balance: a.kft_balance,
            kftl_balance: a.kftl_balance,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

/// GET /user/profile - the account behind the bearer credential
async fn get_profile(CurrentAccount(account): CurrentAccount) -> Json<AccountResponse> {
    Json(account.into())
}

/// GET /users/{username} - public account lookup
async fn get_user_by_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = AccountRepo::new(&state.pool)
        .get_by_username(&username)
        .await?;
    Ok(Json(account.into()))
}

/// GET /users/{user_id}/posts - posts by one author, newest first
async fn list_user_posts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let page = Page::from(params);
    let posts = PostRepo::new(&state.pool)
        .list_for_author(user_id, page)
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/profile", get(get_profile))
        .route("/users/{username}", get(get_user_by_username))
        .route("/users/{user_id}/posts", get(list_user_posts))
}
