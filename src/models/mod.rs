/// Data models for the related-content service
///
/// - `PostRecord`: row shape fetched from the content store (post plus
///   joined author fields and media renditions)
/// - `RelatedPostsQuery`: validated request parameters
/// - `RelatedPost`: public projection returned to clients
/// - Response envelopes for the REST endpoints
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A post as read from the content store, with author fields joined in.
///
/// `featured_media` is a rendition-name → absolute-url map (JSONB), e.g.
/// `{"thumbnail": "...", "medium": "...", "full": "..."}`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: String,
    pub status: String,
    pub featured_media: Option<serde_json::Value>,
    pub published_at: DateTime<Utc>,
    pub author_id: i64,
    pub author_name: String,
    pub author_email: Option<String>,
    pub author_avatar_url: Option<String>,
}

/// Validated related-posts request.
///
/// Built from the raw query string by the boundary validator; out-of-range
/// values are rejected, never clamped.
#[derive(Debug, Clone, Validate)]
pub struct RelatedPostsQuery {
    #[validate(range(min = 1, message = "post_id must be a positive integer"))]
    pub post_id: i64,
    #[validate(range(min = 1, max = 12, message = "limit must be between 1 and 12"))]
    pub limit: i64,
    #[validate(length(max = 100, message = "format must be at most 100 characters"))]
    pub format: String,
}

/// Public projection of a related post.
///
/// `author_avatar` and `featured_image` are null when the source data has
/// no value; the frontend substitutes local placeholder assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RelatedPost {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub url: String,
    pub author: String,
    pub author_avatar: Option<String>,
    pub featured_image: Option<String>,
}

/// Envelope for `GET /api/v1/related-posts`.
///
/// `count` is present on the normal path; `message` only when the source
/// post has no categories (a success state, not an error).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelatedPostsResponse {
    pub success: bool,
    pub related_posts: Vec<RelatedPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RelatedPostsResponse {
    pub fn with_posts(posts: Vec<RelatedPost>) -> Self {
        let count = posts.len();
        Self {
            success: true,
            related_posts: posts,
            count: Some(count),
            message: None,
        }
    }

    pub fn empty_with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            related_posts: Vec::new(),
            count: None,
            message: Some(message.into()),
        }
    }
}

/// Envelope for `GET /api/v1/current-date`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentDateResponse {
    pub success: bool,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn query(post_id: i64, limit: i64) -> RelatedPostsQuery {
        RelatedPostsQuery {
            post_id,
            limit,
            format: "F j, Y".to_string(),
        }
    }

    #[test]
    fn test_limit_bounds() {
        assert!(query(42, 1).validate().is_ok());
        assert!(query(42, 12).validate().is_ok());
        assert!(query(42, 0).validate().is_err());
        assert!(query(42, 13).validate().is_err());
    }

    #[test]
    fn test_post_id_must_be_positive() {
        assert!(query(0, 6).validate().is_err());
        assert!(query(-3, 6).validate().is_err());
        assert!(query(1, 6).validate().is_ok());
    }

    #[test]
    fn test_no_categories_envelope_omits_count() {
        let body = serde_json::to_value(RelatedPostsResponse::empty_with_message(
            "No categories found for this post.",
        ))
        .unwrap();
        assert_eq!(body["success"], true);
        assert!(body.get("count").is_none());
        assert_eq!(body["related_posts"].as_array().unwrap().len(), 0);
    }
}
