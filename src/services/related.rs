/// Related-content resolver
///
/// Given a validated query, finds published posts sharing at least one
/// category with the source post and projects them into the public shape.
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use crate::models::{RelatedPostsQuery, RelatedPostsResponse};
use crate::services::formatter;

pub struct RelatedPostsService {
    store: Arc<dyn ContentStore>,
    site: SiteConfig,
}

impl RelatedPostsService {
    pub fn new(store: Arc<dyn ContentStore>, site: SiteConfig) -> Self {
        Self { store, site }
    }

    /// Resolve related posts for a source post.
    ///
    /// An uncategorized source is a success with an empty list, not an
    /// error; a missing source is a 404.
    pub async fn related_posts(&self, query: &RelatedPostsQuery) -> Result<RelatedPostsResponse> {
        let post = self
            .store
            .find_post(query.post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} does not exist", query.post_id)))?;

        let categories = self.store.post_categories(post.id).await?;
        if categories.is_empty() {
            tracing::debug!(post_id = post.id, "source post has no categories");
            return Ok(RelatedPostsResponse::empty_with_message(
                "No categories found for this post.",
            ));
        }

        let records = self
            .store
            .related_published(&categories, post.id, query.limit)
            .await?;

        tracing::debug!(
            post_id = post.id,
            candidates = records.len(),
            limit = query.limit,
            "resolved related posts"
        );

        let posts = formatter::format_posts(&records, &query.format, &self.site);
        Ok(RelatedPostsResponse::with_posts(posts))
    }

    /// Render the current instant with the given (or site default) format.
    pub fn current_date(&self, format: Option<&str>) -> String {
        let format = format.unwrap_or(&self.site.date_format);
        formatter::current_date(format, &self.site)
    }
}
