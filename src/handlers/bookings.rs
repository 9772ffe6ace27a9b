use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::NewBooking;
use crate::state::AppState;
use crate::store::{DeleteResult, DocFilter, InsertResult};

/// POST /bookings - a tourist books a package.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(booking): Json<NewBooking>,
) -> Result<Json<InsertResult>, ApiError> {
    let doc = serde_json::to_value(&booking)
        .map_err(|e| ApiError::internal(format!("failed to encode booking: {}", e)))?;
    Ok(Json(state.bookings.insert_one(&doc).await?))
}

/// GET /bookings/:email - bookings made by a tourist.
pub async fn bookings_by_tourist(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let filter = DocFilter::new().eq("tourist_email", email);
    Ok(Json(state.bookings.find(&filter).await?))
}

/// GET /guideAssignedBookings/:name - bookings assigned to a guide.
pub async fn bookings_by_guide(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let filter = DocFilter::new().eq("guide_name", name);
    Ok(Json(state.bookings.find(&filter).await?))
}

/// DELETE /deleteBookings/:id
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    Ok(Json(state.bookings.delete_one(&id).await?))
}
