/// Database access layer
///
/// `ContentStore` is the read API this service consumes; `PgContentStore`
/// is the PostgreSQL implementation. Access is strictly read-only; post
/// rows are owned by the upstream content platform.
use async_trait::async_trait;

use crate::error::Result;
use crate::models::PostRecord;

pub mod post_repo;

pub use post_repo::PgContentStore;

/// Read API of the content store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Look up a post by id, regardless of status.
    async fn find_post(&self, post_id: i64) -> Result<Option<PostRecord>>;

    /// Category ids attached to a post. Empty when uncategorized.
    async fn post_categories(&self, post_id: i64) -> Result<Vec<i64>>;

    /// Published posts sharing at least one of `category_ids`, excluding
    /// `exclude_post`, newest first (ties broken by id descending), capped
    /// at `limit`.
    async fn related_published(
        &self,
        category_ids: &[i64],
        exclude_post: i64,
        limit: i64,
    ) -> Result<Vec<PostRecord>>;
}
