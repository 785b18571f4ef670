//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Conflicts are handled via ON CONFLICT, not check-then-insert
//! - Multi-step writes run inside a transaction
//! - Balance changes are guarded in the UPDATE's WHERE clause

pub mod accounts;
pub mod likes;
pub mod posts;
pub mod stats;

pub use accounts::{Account, AccountRepo};
pub use likes::{Like, LikeRepo};
pub use posts::{Post, PostRepo};
pub use stats::{PlatformStats, StatsRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {reason}")]
    Conflict { reason: &'static str },

    #[error("insufficient balance: need {need} KFTL")]
    InsufficientBalance { need: f64 },
}

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::PgPool;

    use crate::db::{migrations, pool::create_pool};

    /// Pool for repository integration tests. Requires DATABASE_URL.
    pub async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 5).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    /// Unique base58-safe suffix so fixtures never collide across runs.
    pub fn unique_suffix() -> String {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        hex[..12].replace('0', "z")
    }
}
