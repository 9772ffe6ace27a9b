// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - malformed record identifier and friends
    InvalidArgument(String),

    // 401 Unauthorized - missing/invalid/expired session token
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict - duplicate user email on create
    Conflict(String),

    // 500 Internal Server Error
    Internal(String),

    // 503 Service Unavailable - store unreachable
    StoreUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidArgument(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg)
            | ApiError::StoreUnavailable(msg) => msg,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
            ApiError::StoreUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError::InvalidArgument(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<crate::store::StoreError> for ApiError {
    fn from(err: crate::store::StoreError) -> Self {
        match err {
            crate::store::StoreError::InvalidId(id) => {
                ApiError::invalid_argument(format!("invalid record id: {}", id))
            }
            crate::store::StoreError::InvalidCollection(name) => {
                // Collections are fixed at startup; reaching this is a server bug
                tracing::error!("unknown collection requested: {}", name);
                ApiError::internal("An error occurred while processing your request")
            }
            crate::store::StoreError::InvalidField(field) => {
                tracing::error!("invalid filter field: {}", field);
                ApiError::internal("An error occurred while processing your request")
            }
            crate::store::StoreError::Connection(msg) => {
                tracing::error!("store connection error: {}", msg);
                ApiError::StoreUnavailable("Database temporarily unavailable".to_string())
            }
            crate::store::StoreError::Sqlx(sqlx_err) => {
                // Log the real error but never leak store internals to clients
                tracing::error!("store query error: {}", sqlx_err);
                ApiError::internal("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::auth::AuthError> for ApiError {
    fn from(err: crate::auth::AuthError) -> Self {
        match err {
            crate::auth::AuthError::MissingSecret => {
                // Startup validation should make this unreachable per-request
                tracing::error!("JWT secret missing at request time");
                ApiError::internal("Server misconfigured")
            }
            crate::auth::AuthError::TokenGeneration(msg) => {
                tracing::error!("token generation failed: {}", msg);
                ApiError::internal("Failed to create session")
            }
            crate::auth::AuthError::InvalidToken(_) => {
                ApiError::unauthorized("unauthorized access")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
