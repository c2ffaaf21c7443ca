/// Current-date handler: renders "now" in the site timezone with a
/// caller-chosen format template.
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::handlers::RelatedHandlerState;
use crate::models::CurrentDateResponse;

const MAX_FORMAT_LEN: usize = 100;

#[derive(Debug, Deserialize)]
pub struct CurrentDateParams {
    pub format: Option<String>,
}

/// GET /api/v1/current-date
pub async fn get_current_date(
    query: web::Query<CurrentDateParams>,
    state: web::Data<RelatedHandlerState>,
) -> Result<HttpResponse> {
    let params = query.into_inner();

    if let Some(format) = &params.format {
        if format.len() > MAX_FORMAT_LEN {
            return Err(AppError::ValidationError(
                "format must be at most 100 characters".to_string(),
            ));
        }
    }

    let date = state.service.current_date(params.format.as_deref());
    Ok(HttpResponse::Ok().json(CurrentDateResponse {
        success: true,
        date,
    }))
}
