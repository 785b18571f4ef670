//! Wallet login endpoint
//!
//! The signature field is accepted unverified and the issued token is
//! the wallet address itself. None of this is a security boundary; any
//! caller who knows an address can act as that account.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use kingface_core::{DisplayName, Username, ValidationError, WalletAddress};

use super::users::AccountResponse;
use crate::db::repos::AccountRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Wallet connect request
#[derive(Deserialize)]
pub struct ConnectRequest {
    pub wallet_address: String,
    pub signature: String,
    pub username: String,
    pub display_name: String,
}

/// Wallet connect response
#[derive(Serialize)]
pub struct ConnectResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: AccountResponse,
}

/// Signature verification stub. Always accepts.
fn verify_wallet_signature(_address: &WalletAddress, _signature: &str) -> bool {
    true
}

/// POST /auth/connect - provision or log in by wallet address
async fn connect_wallet(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConnectRequest>,
) -> Result<Json<ConnectResponse>, ApiError> {
    let address = WalletAddress::new(&req.wallet_address)?;
    let username = Username::new(&req.username)?;
    let display_name = DisplayName::new(&req.display_name)?;

    if !verify_wallet_signature(&address, &req.signature) {
        return Err(ApiError::Validation(ValidationError::InvalidFormat {
            field: "signature",
            reason: "signature rejected",
        }));
    }

    let account = AccountRepo::new(&state.pool)
        .connect(&address, &username, &display_name)
        .await?;

    Ok(Json(ConnectResponse {
        access_token: address.into_string(),
        token_type: "bearer",
        user: account.into(),
    }))
}

/// Auth routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/connect", post(connect_wallet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_stub_accepts_anything() {
        let address = WalletAddress::new("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM").unwrap();
        assert!(verify_wallet_signature(&address, "test_signature_123"));
        assert!(verify_wallet_signature(&address, ""));
    }
}
