//! Post repository
//!
//! Posts are append-only: no edit or delete operations exist. The author
//! username is denormalized onto the row so feed queries never join.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use kingface_core::{ContentKind, MediaAttachment, Page, PostBody};

use super::{Account, DbError};

/// Post record from database
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub content_type: String,
    pub media_url: String,
    pub media_hash: String,
    pub likes_count: i64,
    pub comments_count: i64,
    pub is_nft: bool,
    pub nft_mint: String,
    pub created_at: DateTime<Utc>,
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a post for the given author.
    ///
    /// Posts without media keep empty url/hash columns.
    pub async fn create(
        &self,
        author: &Account,
        body: PostBody,
        kind: ContentKind,
        media: Option<MediaAttachment>,
    ) -> Result<Post, DbError> {
        let (media_url, media_hash) = match media {
            Some(m) => (m.url, m.hash),
            None => (String::new(), String::new()),
        };

        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (author_id, author_username, content, content_type, media_url, media_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, author_id, author_username, content, content_type, media_url,
                      media_hash, likes_count, comments_count, is_nft, nft_mint, created_at
            "#,
        )
        .bind(author.id)
        .bind(&author.username)
        .bind(body.as_str())
        .bind(kind.as_str())
        .bind(&media_url)
        .bind(&media_hash)
        .fetch_one(self.pool)
        .await?;

        Ok(post)
    }

    /// Global feed, newest first.
    pub async fn feed(&self, page: Page) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as(
            r#"
            SELECT id, author_id, author_username, content, content_type, media_url,
                   media_hash, likes_count, comments_count, is_nft, nft_mint, created_at
            FROM posts
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a single post by id.
    pub async fn get(&self, id: Uuid) -> Result<Post, DbError> {
        let post: Post = sqlx::query_as(
            r#"
            SELECT id, author_id, author_username, content, content_type, media_url,
                   media_hash, likes_count, comments_count, is_nft, nft_mint, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "post",
            id: id.to_string(),
        })?;

        Ok(post)
    }

    /// Posts by one author, newest first.
    pub async fn list_for_author(&self, author_id: Uuid, page: Page) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as(
            r#"
            SELECT id, author_id, author_username, content, content_type, media_url,
                   media_hash, likes_count, comments_count, is_nft, nft_mint, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::testing::{test_pool, unique_suffix};
    use crate::db::repos::AccountRepo;
    use kingface_core::{DisplayName, Username, WalletAddress};

    async fn fixture_account(pool: &PgPool) -> Account {
        let suffix = unique_suffix();
        AccountRepo::new(pool)
            .connect(
                &WalletAddress::new(&format!("post{}", suffix)).unwrap(),
                &Username::new(&format!("p{}", suffix)).unwrap(),
                &DisplayName::new("Poster").unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_without_media_has_empty_media_fields() {
        let pool = test_pool().await;
        let author = fixture_account(&pool).await;

        let post = PostRepo::new(&pool)
            .create(
                &author,
                PostBody::new("gm").unwrap(),
                ContentKind::Text,
                None,
            )
            .await
            .unwrap();

        assert_eq!(post.author_id, author.id);
        assert_eq!(post.author_username, author.username);
        assert_eq!(post.content, "gm");
        assert_eq!(post.content_type, "text");
        assert_eq!(post.media_url, "");
        assert_eq!(post.media_hash, "");
        assert_eq!(post.likes_count, 0);
        assert!(!post.is_nft);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_with_media_stores_hash_and_url() {
        let pool = test_pool().await;
        let author = fixture_account(&pool).await;

        let media = MediaAttachment::from_encoded("aGVsbG8=", "https://ipfs.io/ipfs/").unwrap();
        let expected_hash = media.hash.clone();

        let post = PostRepo::new(&pool)
            .create(
                &author,
                PostBody::new("").unwrap(),
                ContentKind::Image,
                Some(media),
            )
            .await
            .unwrap();

        assert_eq!(post.media_hash, expected_hash);
        assert_eq!(post.media_url, format!("https://ipfs.io/ipfs/{}", expected_hash));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn author_listing_only_returns_own_posts() {
        let pool = test_pool().await;
        let repo = PostRepo::new(&pool);

        let alice = fixture_account(&pool).await;
        let bob = fixture_account(&pool).await;

        repo.create(&alice, PostBody::new("a1").unwrap(), ContentKind::Text, None)
            .await
            .unwrap();
        repo.create(&bob, PostBody::new("b1").unwrap(), ContentKind::Text, None)
            .await
            .unwrap();

        let posts = repo.list_for_author(alice.id, Page::default()).await.unwrap();
        assert!(!posts.is_empty());
        assert!(posts.iter().all(|p| p.author_id == alice.id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_post_is_not_found() {
        let pool = test_pool().await;

        let err = PostRepo::new(&pool).get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "post", .. }));
    }
}
