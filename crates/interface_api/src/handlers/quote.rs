//! Quote estimation handlers

use axum::Json;
use domain_rating::estimate;
use validator::Validate;

use crate::dto::quote::{EstimateRequest, EstimateResponse, ESTIMATE_DISCLAIMER};
use crate::error::ApiError;

/// Computes an indicative annual premium
pub async fn estimate_quote(
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    request.validate()?;

    let premium = estimate(&request.into_input());

    Ok(Json(EstimateResponse {
        premium,
        disclaimer: ESTIMATE_DISCLAIMER,
    }))
}
