//! Identity input validation
//!
//! Wallet addresses are Solana-style base58 strings. The address doubles
//! as the bearer credential, so the same parsing applies on login and on
//! every authenticated request.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for wallet addresses
const MAX_ADDRESS_LEN: usize = 64;

/// Maximum length for usernames
const MAX_USERNAME_LEN: usize = 32;

/// Maximum length for display names
const MAX_DISPLAY_NAME_LEN: usize = 64;

/// Base58 alphabet (no 0, O, I, l)
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{1,64}$").expect("invalid address regex"));

/// Username pattern: starts with alphanumeric, allows dots/hyphens/underscores
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,31}$").expect("invalid username regex"));

/// Validated wallet address (base58)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse a wallet address string.
    ///
    /// # Rules
    /// - Max 64 characters
    /// - Base58 alphabet only
    ///
    /// # Example
    /// ```
    /// use kingface_core::WalletAddress;
    ///
    /// assert!(WalletAddress::new("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM").is_ok());
    /// assert!(WalletAddress::new("0xdeadbeef").is_err()); // 0 is not base58
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "wallet_address",
            });
        }

        if s.len() > MAX_ADDRESS_LEN {
            return Err(ValidationError::TooLong {
                field: "wallet_address",
                max: MAX_ADDRESS_LEN,
            });
        }

        if !ADDRESS_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "wallet_address",
                reason: "must be a base58 address string",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Parse a username.
    ///
    /// # Rules
    /// - 1 to 32 characters
    /// - Alphanumeric plus `_`, `.`, `-`; must start alphanumeric
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }

        if s.len() > MAX_USERNAME_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }

        if !USERNAME_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "username",
                reason: "must be alphanumeric with dots/hyphens/underscores, starting with alphanumeric",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated display name (empty allowed, length capped)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_DISPLAY_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "display_name",
                max: MAX_DISPLAY_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_addresses() {
        assert!(WalletAddress::new("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM").is_ok());
        assert!(WalletAddress::new("So11111111111111111111111111111111111111112").is_ok());
    }

    #[test]
    fn rejects_non_base58() {
        // 0, O, I and l are excluded from the base58 alphabet
        let err = WalletAddress::new("0xabc").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        let err = WalletAddress::new("addr with spaces").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_empty_address() {
        let err = WalletAddress::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn address_max_length() {
        let addr_64 = "1".repeat(64);
        assert!(WalletAddress::new(&addr_64).is_ok());

        let addr_65 = "1".repeat(65);
        let err = WalletAddress::new(&addr_65).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 64, .. }));
    }

    #[test]
    fn valid_usernames() {
        assert!(Username::new("kingface_user").is_ok());
        assert!(Username::new("alice.b-2").is_ok());
        assert!(Username::new("a").is_ok());
    }

    #[test]
    fn rejects_bad_usernames() {
        assert!(matches!(
            Username::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(matches!(
            Username::new("_leading").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            Username::new("has space").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            Username::new(&"a".repeat(33)).unwrap_err(),
            ValidationError::TooLong { max: 32, .. }
        ));
    }

    #[test]
    fn display_name_rules() {
        assert!(DisplayName::new("").is_ok());
        assert!(DisplayName::new("King Face").is_ok());
        assert!(matches!(
            DisplayName::new(&"x".repeat(65)).unwrap_err(),
            ValidationError::TooLong { max: 64, .. }
        ));
    }
}
