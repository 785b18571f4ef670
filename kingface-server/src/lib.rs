//! kingface-server: HTTP backend for KingFace
//!
//! Wallet-based login, text/media posts, the token-gated like economy,
//! and platform statistics over Postgres. The ledger RPC client is held
//! for lifecycle symmetry; no request handler consults it.

pub mod config;
pub mod db;
pub mod http;
pub mod ledger;

pub use config::AppConfig;
pub use http::{run_server, ApiError, ServerConfig};
