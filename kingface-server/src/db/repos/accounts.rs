//! Account repository
//!
//! Login is a single upsert keyed on the wallet address: an existing
//! account only gets its last-seen timestamp bumped, so the handle and
//! display name from a repeat login are ignored.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use kingface_core::token::{STARTING_KFTL_BALANCE, STARTING_KFT_BALANCE};
use kingface_core::{DisplayName, Username, WalletAddress};

use super::DbError;

/// Account record from database
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub wallet_address: String,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub tree_level: i32,
    pub kft_balance: f64,
    pub kftl_balance: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account repository
pub struct AccountRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AccountRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Provision or log in an account by wallet address.
    ///
    /// New addresses insert a fresh account with the starting balances.
    /// Known addresses get `updated_at` bumped and are returned as-is.
    /// A new address claiming a taken username is a conflict.
    pub async fn connect(
        &self,
        address: &WalletAddress,
        username: &Username,
        display_name: &DisplayName,
    ) -> Result<Account, DbError> {
        let account: Account = sqlx::query_as(
            r#"
            INSERT INTO accounts (wallet_address, username, display_name, kft_balance, kftl_balance)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (wallet_address) DO UPDATE SET updated_at = NOW()
            RETURNING id, wallet_address, username, display_name, bio, avatar_url,
                      tree_level, kft_balance, kftl_balance, created_at, updated_at
            "#,
        )
        .bind(address.as_str())
        .bind(username.as_str())
        .bind(display_name.as_str())
        .bind(STARTING_KFT_BALANCE)
        .bind(STARTING_KFTL_BALANCE)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // The wallet-address conflict is absorbed by the upsert, so a
            // unique violation here can only be the username.
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return DbError::Conflict {
                        reason: "username already taken",
                    };
                }
            }
            DbError::Sqlx(e)
        })?;

        Ok(account)
    }

    /// Look up an account by wallet address.
    ///
    /// Returns None rather than NotFound: the caller decides whether a
    /// miss means 404 (lookup) or 401 (credential resolution).
    pub async fn get_by_address(&self, address: &str) -> Result<Option<Account>, DbError> {
        let account = sqlx::query_as(
            r#"
            SELECT id, wallet_address, username, display_name, bio, avatar_url,
                   tree_level, kft_balance, kftl_balance, created_at, updated_at
            FROM accounts
            WHERE wallet_address = $1
            "#,
        )
        .bind(address)
        .fetch_optional(self.pool)
        .await?;

        Ok(account)
    }

    /// Look up an account by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Account, DbError> {
        let account: Account = sqlx::query_as(
            r#"
            SELECT id, wallet_address, username, display_name, bio, avatar_url,
                   tree_level, kft_balance, kftl_balance, created_at, updated_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: username.to_owned(),
        })?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::testing::{test_pool, unique_suffix};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p kingface-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn second_login_returns_same_account() {
        let pool = test_pool().await;
        let repo = AccountRepo::new(&pool);

        let suffix = unique_suffix();
        let address = WalletAddress::new(&format!("addr{}", suffix)).unwrap();
        let first_name = Username::new(&format!("u{}", suffix)).unwrap();
        let display = DisplayName::new("First").unwrap();

        let first = repo.connect(&address, &first_name, &display).await.unwrap();
        assert_eq!(first.kftl_balance, 10.0);
        assert_eq!(first.kft_balance, 0.0);
        assert_eq!(first.tree_level, 1);

        // Same address again with a different handle: the id is stable
        // and the new handle is ignored.
        let second_name = Username::new(&format!("x{}", suffix)).unwrap();
        let second = repo
            .connect(&address, &second_name, &DisplayName::new("Second").unwrap())
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.username, first.username);
        assert_eq!(second.display_name, first.display_name);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn taken_username_conflicts() {
        let pool = test_pool().await;
        let repo = AccountRepo::new(&pool);

        let suffix = unique_suffix();
        let username = Username::new(&format!("u{}", suffix)).unwrap();
        let display = DisplayName::new("").unwrap();

        let addr_a = WalletAddress::new(&format!("aaa{}", suffix)).unwrap();
        repo.connect(&addr_a, &username, &display).await.unwrap();

        let addr_b = WalletAddress::new(&format!("bbb{}", suffix)).unwrap();
        let err = repo.connect(&addr_b, &username, &display).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_username_is_not_found() {
        let pool = test_pool().await;
        let repo = AccountRepo::new(&pool);

        let err = repo
            .get_by_username(&format!("ghost{}", unique_suffix()))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_address_is_none() {
        let pool = test_pool().await;
        let repo = AccountRepo::new(&pool);

        let found = repo
            .get_by_address(&format!("ghost{}", unique_suffix()))
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
