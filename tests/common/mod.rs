//! In-memory ContentStore for integration tests
//!
//! Mirrors the PostgreSQL store's semantics (published-only filtering,
//! source exclusion, newest-first ordering with id-descending tie-break,
//! limit) without requiring a database. Also counts store calls so tests
//! can assert that validation failures never reach the store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use related_content_service::config::SiteConfig;
use related_content_service::db::ContentStore;
use related_content_service::error::Result;
use related_content_service::models::PostRecord;

pub struct InMemoryContentStore {
    posts: Vec<PostRecord>,
    categories: HashMap<i64, Vec<i64>>,
    call_count: Arc<Mutex<usize>>,
}

impl InMemoryContentStore {
    pub fn new(posts: Vec<PostRecord>, categories: Vec<(i64, Vec<i64>)>) -> Self {
        Self {
            posts,
            categories: categories.into_iter().collect(),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<Mutex<usize>> {
        self.call_count.clone()
    }

    fn record_call(&self) {
        *self.call_count.lock().unwrap() += 1;
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn find_post(&self, post_id: i64) -> Result<Option<PostRecord>> {
        self.record_call();
        Ok(self.posts.iter().find(|p| p.id == post_id).cloned())
    }

    async fn post_categories(&self, post_id: i64) -> Result<Vec<i64>> {
        self.record_call();
        Ok(self.categories.get(&post_id).cloned().unwrap_or_default())
    }

    async fn related_published(
        &self,
        category_ids: &[i64],
        exclude_post: i64,
        limit: i64,
    ) -> Result<Vec<PostRecord>> {
        self.record_call();
        let mut matches: Vec<PostRecord> = self
            .posts
            .iter()
            .filter(|p| p.status == "published" && p.id != exclude_post)
            .filter(|p| {
                self.categories
                    .get(&p.id)
                    .map(|cats| cats.iter().any(|c| category_ids.contains(c)))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        matches.truncate(limit as usize);
        Ok(matches)
    }
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

/// A published post fixture with sensible defaults
pub fn post(id: i64, published_at: &str) -> PostRecord {
    PostRecord {
        id,
        title: format!("Post {}", id),
        content: format!("Body of post {}.", id),
        excerpt: None,
        slug: format!("post-{}", id),
        status: "published".to_string(),
        featured_media: None,
        published_at: ts(published_at),
        author_id: 1,
        author_name: "Ada Writer".to_string(),
        author_email: Some("ada@example.com".to_string()),
        author_avatar_url: None,
    }
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        base_url: "https://example.com".to_string(),
        timezone: chrono_tz::Tz::UTC,
        date_format: "F j, Y".to_string(),
        excerpt_words: 25,
        avatar_size: 80,
    }
}
