use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::CookieJar;

use crate::auth::{self, Claims};
use crate::config;
use crate::error::ApiError;

/// Authenticated identity extracted from the session cookie
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub email: String,
}

impl From<Claims> for SessionUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
        }
    }
}

/// Session-gating middleware for protected routes.
///
/// Pulls the token from the cookie jar, verifies signature and expiration,
/// and injects the decoded identity into request extensions. Any failure is
/// a 401 before the handler runs. The guard checks authentication only; it
/// does not compare the identity against path parameters.
pub async fn require_session(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let cookie_name = &config::config().security.cookie_name;

    let token = jar
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| ApiError::unauthorized("unauthorized access"))?;

    let claims = auth::verify_token(&token)
        .map_err(|_| ApiError::unauthorized("unauthorized access"))?;

    request.extensions_mut().insert(SessionUser::from(claims));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn guarded_probe(hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/probe",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
            .route_layer(axum::middleware::from_fn(require_session))
    }

    fn request_with_cookie(token: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .uri("/probe")
            .header("cookie", format!("token={}", token))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn missing_cookie_rejects_before_handler() {
        crate::testing::init();
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_probe(hits.clone());

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/probe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn tampered_token_rejects_before_handler() {
        crate::testing::init();
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_probe(hits.clone());

        let token = auth::issue_token(&Claims::new("eve@example.com".to_string())).unwrap();
        let tampered = format!("{}x", token);

        let response = app.oneshot(request_with_cookie(&tampered)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn expired_token_rejects_before_handler() {
        crate::testing::init();
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_probe(hits.clone());

        let now = chrono::Utc::now();
        let expired = Claims {
            email: "late@example.com".to_string(),
            exp: (now - chrono::Duration::days(2)).timestamp(),
            iat: (now - chrono::Duration::days(3)).timestamp(),
        };
        let token = auth::issue_token(&expired).unwrap();

        let response = app.oneshot(request_with_cookie(&token)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_token_reaches_handler() {
        crate::testing::init();
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_probe(hits.clone());

        let token = auth::issue_token(&Claims::new("ann@example.com".to_string())).unwrap();
        let response = app.oneshot(request_with_cookie(&token)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
