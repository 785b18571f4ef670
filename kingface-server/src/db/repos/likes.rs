//! Like repository
//!
//! The like settlement is the one multi-step write in the system: insert
//! the like, bump the post counter, debit the actor, credit the author.
//! All four run in a single transaction, so a failed debit rolls back
//! the recorded like as well.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use kingface_core::token::{author_reward, LIKE_COST_KFTL};

use super::{Account, DbError};

/// Like record from database
#[derive(Debug, Clone, FromRow)]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub kftl_spent: f64,
    pub created_at: DateTime<Utc>,
}

/// Like repository
pub struct LikeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LikeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Settle a like: record it and transfer the token cost.
    ///
    /// Check order fixes error precedence: balance, then post existence,
    /// then duplicate detection. The actor's balance is re-checked in the
    /// debit's WHERE clause; a concurrent spend that drained it rolls the
    /// whole settlement back.
    pub async fn settle(&self, actor: &Account, post_id: Uuid) -> Result<Like, DbError> {
        if actor.kftl_balance < LIKE_COST_KFTL {
            return Err(DbError::InsufficientBalance {
                need: LIKE_COST_KFTL,
            });
        }

        let mut tx = self.pool.begin().await?;

        let author: Option<(Uuid,)> = sqlx::query_as("SELECT author_id FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;

        let (author_id,) = author.ok_or_else(|| DbError::NotFound {
            resource: "post",
            id: post_id.to_string(),
        })?;

        // One like per (post, user); a duplicate inserts nothing.
        let like: Option<Like> = sqlx::query_as(
            r#"
            INSERT INTO likes (post_id, user_id, kftl_spent)
            VALUES ($1, $2, $3)
            ON CONFLICT (post_id, user_id) DO NOTHING
            RETURNING id, post_id, user_id, kftl_spent, created_at
            "#,
        )
        .bind(post_id)
        .bind(actor.id)
        .bind(LIKE_COST_KFTL)
        .fetch_optional(&mut *tx)
        .await?;

        let like = like.ok_or(DbError::Conflict {
            reason: "already liked this post",
        })?;

        sqlx::query("UPDATE posts SET likes_count = likes_count + 1 WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        let debited = sqlx::query(
            "UPDATE accounts SET kftl_balance = kftl_balance - $2 WHERE id = $1 AND kftl_balance >= $2",
        )
        .bind(actor.id)
        .bind(LIKE_COST_KFTL)
        .execute(&mut *tx)
        .await?;

        if debited.rows_affected() == 0 {
            return Err(DbError::InsufficientBalance {
                need: LIKE_COST_KFTL,
            });
        }

        sqlx::query("UPDATE accounts SET kftl_balance = kftl_balance + $2 WHERE id = $1")
            .bind(author_id)
            .bind(author_reward())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(like)
    }

    /// All likes for a post, oldest first. An unknown post id yields an
    /// empty list, not an error.
    pub async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Like>, DbError> {
        let likes = sqlx::query_as(
            r#"
            SELECT id, post_id, user_id, kftl_spent, created_at
            FROM likes
            WHERE post_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;

        Ok(likes)
    }
}
