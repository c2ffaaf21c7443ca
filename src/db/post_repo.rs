use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::ContentStore;
use crate::error::Result;
use crate::models::PostRecord;

/// PostgreSQL implementation of the content-store read API.
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    /// Find a post by ID with author fields joined in
    async fn find_post(&self, post_id: i64) -> Result<Option<PostRecord>> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT p.id, p.title, p.content, p.excerpt, p.slug, p.status, p.featured_media,
                   p.published_at,
                   a.id AS author_id, a.display_name AS author_name, a.email AS author_email,
                   a.avatar_url AS author_avatar_url
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Category ids for a post
    async fn post_categories(&self, post_id: i64) -> Result<Vec<i64>> {
        let rows = sqlx::query_as::<_, (i64,)>(
            r#"
            SELECT category_id
            FROM post_categories
            WHERE post_id = $1
            ORDER BY category_id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Published posts sharing at least one category with the source.
    /// Returns posts in descending order by publish date, id descending on
    /// ties, so pagination and fixtures stay deterministic.
    async fn related_published(
        &self,
        category_ids: &[i64],
        exclude_post: i64,
        limit: i64,
    ) -> Result<Vec<PostRecord>> {
        let posts = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT p.id, p.title, p.content, p.excerpt, p.slug, p.status, p.featured_media,
                   p.published_at,
                   a.id AS author_id, a.display_name AS author_name, a.email AS author_email,
                   a.avatar_url AS author_avatar_url
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.status = 'published'
              AND p.id <> $2
              AND EXISTS (
                  SELECT 1 FROM post_categories pc
                  WHERE pc.post_id = p.id AND pc.category_id = ANY($1)
              )
            ORDER BY p.published_at DESC, p.id DESC
            LIMIT $3
            "#,
        )
        .bind(category_ids)
        .bind(exclude_post)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
