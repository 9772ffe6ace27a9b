use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::NewWishlistEntry;
use crate::state::AppState;
use crate::store::{DeleteResult, DocFilter, InsertResult};

/// GET /wishlist/:email - a user's saved packages.
pub async fn wishlist_for_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let filter = DocFilter::new().eq("email", email);
    Ok(Json(state.wishlist.find(&filter).await?))
}

/// POST /wishlist
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Json(entry): Json<NewWishlistEntry>,
) -> Result<Json<InsertResult>, ApiError> {
    let doc = serde_json::to_value(&entry)
        .map_err(|e| ApiError::internal(format!("failed to encode wishlist entry: {}", e)))?;
    Ok(Json(state.wishlist.insert_one(&doc).await?))
}

/// DELETE /wishlist/:id - removes exactly one entry; deleting the same id
/// again reports deletedCount 0.
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    Ok(Json(state.wishlist.delete_one(&id).await?))
}
