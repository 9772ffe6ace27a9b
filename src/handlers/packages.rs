use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::NewPackage;
use crate::state::AppState;
use crate::store::{DocFilter, InsertResult};

/// GET /packages - every tour package.
pub async fn list_packages(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.packages.find(&DocFilter::new()).await?))
}

/// GET /packages/:id
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .packages
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("package not found"))
}

/// GET /categoryBasePackages/:category - packages whose tour_type equals the
/// category exactly.
pub async fn packages_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let filter = DocFilter::new().eq("tour_type", category);
    Ok(Json(state.packages.find(&filter).await?))
}

/// POST /packages
pub async fn create_package(
    State(state): State<AppState>,
    Json(package): Json<NewPackage>,
) -> Result<Json<InsertResult>, ApiError> {
    let doc = serde_json::to_value(&package)
        .map_err(|e| ApiError::internal(format!("failed to encode package: {}", e)))?;
    Ok(Json(state.packages.insert_one(&doc).await?))
}
