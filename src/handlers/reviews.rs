use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::NewReview;
use crate::state::AppState;
use crate::store::{DocFilter, InsertResult};

/// GET /reviews/:email - reviews left for a guide.
pub async fn reviews_for_guide(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let filter = DocFilter::new().eq("guide_email", email);
    Ok(Json(state.reviews.find(&filter).await?))
}

/// POST /reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(review): Json<NewReview>,
) -> Result<Json<InsertResult>, ApiError> {
    let doc = serde_json::to_value(&review)
        .map_err(|e| ApiError::internal(format!("failed to encode review: {}", e)))?;
    Ok(Json(state.reviews.insert_one(&doc).await?))
}
