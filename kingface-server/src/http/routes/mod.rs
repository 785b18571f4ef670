//! Route handlers organized by resource

pub mod auth;
pub mod health;
pub mod posts;
pub mod stats;
pub mod users;

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

/// All API routes, to be nested under /api.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(users::router())
        .merge(posts::router())
        .merge(stats::router())
}
