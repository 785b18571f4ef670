//! Application configuration - environment loading
//!
//! Configuration is read from environment variables (after `.env`
//! loading in the binary):
//! - `CORS_ORIGINS`: JSON array of allowed origins (default: `["http://localhost:3000"]`)
//! - `LEDGER_RPC_URL`: token ledger JSON-RPC endpoint
//! - `MEDIA_GATEWAY`: URL prefix for content-addressed media
//!
//! `DATABASE_URL` is owned by the binary (flag or environment), not by
//! this struct.

const DEFAULT_LEDGER_RPC_URL: &str = "https://api.devnet.solana.com";
const DEFAULT_MEDIA_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origins allowed by the CORS layer
    pub cors_origins: Vec<String>,
    /// JSON-RPC endpoint of the token ledger node
    pub ledger_rpc_url: String,
    /// URL prefix prepended to media hashes
    pub media_gateway: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) => parse_origins(&raw).unwrap_or_else(|| {
                tracing::warn!("CORS_ORIGINS is not a JSON array of strings, using default");
                default_origins()
            }),
            Err(_) => default_origins(),
        };

        Self {
            cors_origins,
            ledger_rpc_url: std::env::var("LEDGER_RPC_URL")
                .unwrap_or_else(|_| DEFAULT_LEDGER_RPC_URL.to_owned()),
            media_gateway: std::env::var("MEDIA_GATEWAY")
                .unwrap_or_else(|_| DEFAULT_MEDIA_GATEWAY.to_owned()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cors_origins: default_origins(),
            ledger_rpc_url: DEFAULT_LEDGER_RPC_URL.to_owned(),
            media_gateway: DEFAULT_MEDIA_GATEWAY.to_owned(),
        }
    }
}

fn default_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_owned()]
}

/// Parse a JSON array of origin strings.
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_origin_array() {
        let origins = parse_origins(r#"["http://localhost:3000", "https://kingface.app"]"#);
        assert_eq!(
            origins,
            Some(vec![
                "http://localhost:3000".to_owned(),
                "https://kingface.app".to_owned()
            ])
        );
    }

    #[test]
    fn rejects_non_array() {
        assert_eq!(parse_origins("http://localhost:3000"), None);
        assert_eq!(parse_origins("{\"origin\": true}"), None);
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert!(config.media_gateway.ends_with('/'));
    }
}
