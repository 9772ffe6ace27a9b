use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{DocFilter, InsertResult};

/// GET /story - all traveler stories.
pub async fn list_stories(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.story.find(&DocFilter::new()).await?))
}

/// GET /story/:id
pub async fn get_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .story
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("story not found"))
}

/// POST /story - stories are open documents.
pub async fn create_story(
    State(state): State<AppState>,
    Json(story): Json<Value>,
) -> Result<Json<InsertResult>, ApiError> {
    Ok(Json(state.story.insert_one(&story).await?))
}
