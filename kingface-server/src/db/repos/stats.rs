//! Platform statistics
//!
//! Counts are recomputed on every request in one round trip; there is
//! no cache to invalidate.

use sqlx::{PgPool, Row};

use kingface_core::token::LIKE_COST_KFTL;

use super::DbError;

/// Platform-wide counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformStats {
    pub users_count: i64,
    pub posts_count: i64,
    pub likes_count: i64,
}

impl PlatformStats {
    /// Every like spends the same fixed cost, so total spend is derived.
    pub fn total_kftl_spent(&self) -> f64 {
        self.likes_count as f64 * LIKE_COST_KFTL
    }
}

/// Statistics repository
pub struct StatsRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count accounts, posts and likes in a single query.
    pub async fn platform(&self) -> Result<PlatformStats, DbError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM accounts) AS users_count,
                (SELECT COUNT(*) FROM posts) AS posts_count,
                (SELECT COUNT(*) FROM likes) AS likes_count
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(PlatformStats {
            users_count: row.get("users_count"),
            posts_count: row.get("posts_count"),
            likes_count: row.get("likes_count"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_spend_tracks_like_count() {
        let stats = PlatformStats {
            users_count: 3,
            posts_count: 5,
            likes_count: 7,
        };
        assert_eq!(stats.total_kftl_spent(), 7.0);

        let empty = PlatformStats {
            users_count: 0,
            posts_count: 0,
            likes_count: 0,
        };
        assert_eq!(empty.total_kftl_spent(), 0.0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn counts_grow_with_activity() {
        use crate::db::repos::testing::{test_pool, unique_suffix};
        use crate::db::repos::{AccountRepo, PostRepo};
        use kingface_core::{ContentKind, DisplayName, PostBody, Username, WalletAddress};

        let pool = test_pool().await;
        let before = StatsRepo::new(&pool).platform().await.unwrap();

        let suffix = unique_suffix();
        let account = AccountRepo::new(&pool)
            .connect(
                &WalletAddress::new(&format!("stat{}", suffix)).unwrap(),
                &Username::new(&format!("s{}", suffix)).unwrap(),
                &DisplayName::new("").unwrap(),
            )
            .await
            .unwrap();
        PostRepo::new(&pool)
            .create(&account, PostBody::new("gm").unwrap(), ContentKind::Text, None)
            .await
            .unwrap();

        let after = StatsRepo::new(&pool).platform().await.unwrap();
        assert_eq!(after.users_count, before.users_count + 1);
        assert_eq!(after.posts_count, before.posts_count + 1);
    }
}
