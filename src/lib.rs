pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod testing;

use axum::extract::State;
use axum::handler::Handler;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::require_session;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(session_routes())
        .merge(user_routes())
        .merge(booking_routes())
        .merge(package_routes())
        .merge(guide_routes())
        .merge(review_routes())
        .merge(wishlist_routes())
        .merge(story_routes())
        .with_state(state)
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn session_routes() -> Router<AppState> {
    use handlers::session;

    Router::new()
        .route("/jwt", post(session::issue_session))
        .route("/logout", post(session::logout))
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    // Listing requires a session but registration does not, so the guard sits
    // on the one handler instead of the whole method router.
    let guarded_list = users::list_users.layer(axum::middleware::from_fn(require_session));

    let guarded = Router::new()
        .route("/users/changeRole/:id", patch(users::change_role))
        .route(
            "/users/requestToBeGuide/:id",
            patch(users::request_to_be_guide),
        )
        .route_layer(axum::middleware::from_fn(require_session));

    Router::new()
        .route("/users", get(guarded_list).post(users::create_user))
        .route("/users/:email", get(users::get_user_by_email))
        .merge(guarded)
}

fn booking_routes() -> Router<AppState> {
    use handlers::bookings;

    Router::new()
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/:email", get(bookings::bookings_by_tourist))
        .route(
            "/guideAssignedBookings/:name",
            get(bookings::bookings_by_guide),
        )
        .route("/deleteBookings/:id", delete(bookings::delete_booking))
        .route_layer(axum::middleware::from_fn(require_session))
}

fn package_routes() -> Router<AppState> {
    use handlers::packages;

    Router::new()
        .route(
            "/packages",
            get(packages::list_packages).post(packages::create_package),
        )
        .route("/packages/:id", get(packages::get_package))
        .route(
            "/categoryBasePackages/:category",
            get(packages::packages_by_category),
        )
}

fn guide_routes() -> Router<AppState> {
    use handlers::guides;

    Router::new()
        .route("/guides", get(guides::list_guides).post(guides::create_guide))
        .route("/guides/:id", get(guides::get_guide))
}

fn review_routes() -> Router<AppState> {
    use handlers::reviews;

    Router::new()
        .route("/reviews/:email", get(reviews::reviews_for_guide))
        .route("/reviews", post(reviews::create_review))
}

fn wishlist_routes() -> Router<AppState> {
    use handlers::wishlist;

    // GET takes an email, DELETE takes a record id; axum needs one parameter
    // name per position, the handlers read it as a plain string either way.
    Router::new()
        .route("/wishlist", post(wishlist::add_to_wishlist))
        .route(
            "/wishlist/:key",
            get(wishlist::wishlist_for_user).delete(wishlist::remove_from_wishlist),
        )
        .route_layer(axum::middleware::from_fn(require_session))
}

fn story_routes() -> Router<AppState> {
    use handlers::story;

    Router::new()
        .route("/story", get(story::list_stories).post(story::create_story))
        .route("/story/:id", get(story::get_story))
}

fn cors_layer() -> CorsLayer {
    let config = config::config();
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Cookies travel cross-site in production, so origins are explicit and
    // credentials are allowed (a wildcard origin would forbid them).
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn root() -> &'static str {
    "Trip Booking API is running"
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
