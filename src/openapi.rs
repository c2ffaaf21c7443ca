/// OpenAPI documentation for the Related-Content Service
use utoipa::OpenApi;

use crate::models::{CurrentDateResponse, RelatedPost, RelatedPostsResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Related-Content Service API",
        version = "1.0.0",
        description = "Read-only recommendation service: surfaces posts related to a source post by shared category, newest first, projected into a card-friendly JSON shape (title, formatted date, excerpt, permalink, author, avatar, featured image). Dates are rendered with PHP-style format templates in the site timezone.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8087", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "related-posts", description = "Category-based related-post resolution"),
        (name = "dates", description = "Site-timezone date rendering"),
    ),
    components(schemas(RelatedPost, RelatedPostsResponse, CurrentDateResponse)),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Related-Content Service"
    }

    pub fn version() -> &'static str {
        "1.0.0"
    }

    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
