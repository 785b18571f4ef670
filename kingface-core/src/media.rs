//! Media attachment hashing
//!
//! Posts carry media as a base64 payload. No bytes are uploaded anywhere:
//! the attachment is reduced to a SHA-256 content hash plus a gateway URL
//! derived from it. The hash covers the encoded payload exactly as it
//! arrived on the wire, so the same payload always maps to the same URL.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

use super::ValidationError;

/// A content-addressed media attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    /// Hex-encoded SHA-256 of the encoded payload
    pub hash: String,
    /// Gateway URL: configured prefix + hash
    pub url: String,
}

impl MediaAttachment {
    /// Build an attachment from a base64 payload and a gateway prefix.
    ///
    /// The payload must be non-empty, valid base64. The decoded bytes are
    /// discarded; only the hash of the encoded form is kept.
    pub fn from_encoded(payload: &str, gateway_prefix: &str) -> Result<Self, ValidationError> {
        if payload.is_empty() {
            return Err(ValidationError::Empty {
                field: "media_data",
            });
        }

        BASE64
            .decode(payload)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "media_data",
                reason: "not valid base64",
            })?;

        let hash = hex::encode(Sha256::digest(payload.as_bytes()));
        let url = format!("{}{}", gateway_prefix, hash);

        Ok(Self { hash, url })
    }
}
