/// Related-posts handler: HTTP boundary for the resolver
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::RelatedPostsQuery;
use crate::services::RelatedPostsService;

/// Format applied when the request does not send one. Part of the wire
/// contract, independent of the site-level default used elsewhere.
const DEFAULT_DATE_FORMAT: &str = "F j, Y";

/// Raw query-string parameters.
///
/// Fields stay strings so that malformed values are rejected by the
/// explicit validator below with a structured error body, instead of by
/// the framework's deserializer.
#[derive(Debug, Deserialize)]
pub struct RawRelatedParams {
    pub post_id: Option<String>,
    pub limit: Option<String>,
    pub format: Option<String>,
}

impl RawRelatedParams {
    /// Convert into the strongly-typed query, rejecting missing or
    /// malformed values. Out-of-range values are errors, never clamped.
    pub fn into_query(self, default_limit: i64) -> Result<RelatedPostsQuery> {
        let post_id = self
            .post_id
            .ok_or_else(|| AppError::ValidationError("post_id is required".to_string()))?
            .parse::<i64>()
            .map_err(|_| AppError::ValidationError("post_id must be an integer".to_string()))?;

        let limit = match self.limit {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::ValidationError("limit must be an integer".to_string()))?,
            None => default_limit,
        };

        let query = RelatedPostsQuery {
            post_id,
            limit,
            format: self
                .format
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
        };

        query
            .validate()
            .map_err(|errors| AppError::ValidationError(validation_message(&errors)))?;

        Ok(query)
    }
}

/// Flatten validator output into a single client-facing message.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

pub struct RelatedHandlerState {
    pub service: Arc<RelatedPostsService>,
    pub default_limit: i64,
}

/// GET /api/v1/related-posts
pub async fn get_related_posts(
    query: web::Query<RawRelatedParams>,
    state: web::Data<RelatedHandlerState>,
) -> Result<HttpResponse> {
    let parsed = query.into_inner().into_query(state.default_limit)?;

    tracing::debug!(
        post_id = parsed.post_id,
        limit = parsed.limit,
        "related-posts request"
    );

    let response = state.service.related_posts(&parsed).await?;
    Ok(HttpResponse::Ok().json(response))
}
