use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{ChangeRoleRequest, NewUser, Status};
use crate::state::AppState;
use crate::store::{DocFilter, UpdateResult};

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub search: Option<String>,
    pub filter: Option<String>,
}

/// GET /users?search=&filter= - list users.
///
/// `search` matches name OR email as a case-insensitive substring; `filter`
/// restricts by role, also case-insensitively. Both absent returns everyone.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let mut filter = DocFilter::new();

    if let Some(search) = query.search.filter(|s| !s.is_empty()) {
        filter = filter.any_contains_ci(&["name", "email"], search);
    }
    if let Some(role) = query.filter.filter(|s| !s.is_empty()) {
        filter = filter.contains_ci("role", role);
    }

    Ok(Json(state.users.find(&filter).await?))
}

/// GET /users/:email - single user or JSON null when absent.
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let user = state
        .users
        .find_one(&DocFilter::new().eq("email", email))
        .await?;
    Ok(Json(user.unwrap_or(Value::Null)))
}

/// POST /users - create-if-absent, keyed on email.
///
/// The existence check and the insert are not atomic; a duplicate slipping
/// through the race is harmless, so nothing stronger is used.
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<NewUser>,
) -> Result<Response, ApiError> {
    let existing = state
        .users
        .find_one(&DocFilter::new().eq("email", user.email.clone()))
        .await?;

    if existing.is_some() {
        return Ok((
            StatusCode::CONFLICT,
            Json(json!({ "message": "user already exists", "insertedId": null })),
        )
            .into_response());
    }

    let doc = serde_json::to_value(&user)
        .map_err(|e| ApiError::internal(format!("failed to encode user: {}", e)))?;
    let result = state.users.insert_one(&doc).await?;
    Ok(Json(result).into_response())
}

/// PATCH /users/changeRole/:id - promote a user. Sets the new role and marks
/// the user Verified in one patch. Unconditional: no check that the target is
/// in any particular prior state.
pub async fn change_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ChangeRoleRequest>,
) -> Result<Json<UpdateResult>, ApiError> {
    let patch = json!({ "role": body.role, "status": Status::Verified });
    Ok(Json(state.users.update_one(&id, &patch).await?))
}

/// PATCH /users/requestToBeGuide/:id - flag a user as having asked to become
/// a guide.
pub async fn request_to_be_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, ApiError> {
    let patch = json!({ "status": Status::Requested });
    Ok(Json(state.users.update_one(&id, &patch).await?))
}
