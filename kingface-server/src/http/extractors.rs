//! Custom Axum extractors
//!
//! The bearer credential is the literal wallet address of the account,
//! accepted without any signature check. Resolution failure is always
//! 401; callers cannot distinguish an unknown address from a malformed
//! one.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use kingface_core::WalletAddress;

use super::error::ApiError;
use super::server::AppState;
use crate::db::repos::{Account, AccountRepo};

/// The account resolved from the request's bearer credential
pub struct CurrentAccount(pub Account);

impl FromRequestParts<Arc<AppState>> for CurrentAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApiError::Unauthenticated)?;
        let address = WalletAddress::new(token).map_err(|_| ApiError::Unauthenticated)?;

        let account = AccountRepo::new(&state.pool)
            .get_by_address(address.as_str())
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Self(account))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(str::trim)
}
