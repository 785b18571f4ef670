//! Platform statistics endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{PlatformStats, StatsRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Platform statistics response
#[derive(Serialize)]
pub struct StatsResponse {
    pub users_count: i64,
    pub posts_count: i64,
    pub likes_count: i64,
    pub total_kftl_spent: f64,
}

impl From<PlatformStats> for StatsResponse {
    fn from(s: PlatformStats) -> Self {
        Self {
            users_count: s.users_count,
            posts_count: s.posts_count,
            likes_count: s.likes_count,
            total_kftl_spent: s.total_kftl_spent(),
        }
    }
}

/// GET /stats - platform counters, recomputed per request
async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = StatsRepo::new(&state.pool).platform().await?;
    Ok(Json(stats.into()))
}

/// Stats routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}
