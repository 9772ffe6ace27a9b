use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{DocFilter, InsertResult};

/// GET /guides
pub async fn list_guides(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.guides.find(&DocFilter::new()).await?))
}

/// GET /guides/:id
pub async fn get_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .guides
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("guide not found"))
}

/// POST /guides - guide profiles are open documents; the frontend owns the
/// shape.
pub async fn create_guide(
    State(state): State<AppState>,
    Json(guide): Json<Value>,
) -> Result<Json<InsertResult>, ApiError> {
    Ok(Json(state.guides.insert_one(&guide).await?))
}
