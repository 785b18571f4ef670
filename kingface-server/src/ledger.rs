//! Token ledger RPC client
//!
//! Thin JSON-RPC client for the ledger node named by `LEDGER_RPC_URL`.
//! The server probes the node once at startup and keeps the client in
//! application state; no request handler consults the ledger. Token
//! balances in scope live entirely in Postgres.

use serde_json::{json, Value};

/// Ledger RPC error type
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger rpc error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ledger rpc returned no result")]
    MissingResult,
}

/// JSON-RPC client for the token ledger node
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    rpc_url: String,
}

impl LedgerClient {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            rpc_url: rpc_url.into(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Ask the node whether it is healthy.
    ///
    /// Returns the node's health string (e.g. "ok"). Failure is not
    /// fatal to the server; callers decide whether to warn or bail.
    pub async fn probe(&self) -> Result<String, LedgerError> {
        let response: Value = self
            .http
            .post(&self.rpc_url)
            .json(&health_request())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .get("result")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(LedgerError::MissingResult)
    }
}

fn health_request() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getHealth",
    })
}
