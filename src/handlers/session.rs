use axum::Json;
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::models::IdentityClaim;

/// POST /jwt - mint a session token for the given identity and set it as an
/// HTTP-only cookie.
pub async fn issue_session(
    jar: CookieJar,
    Json(identity): Json<IdentityClaim>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let claims = Claims::new(identity.email);
    let token = auth::issue_token(&claims)?;

    tracing::debug!("issued session token for {}", claims.email);
    Ok((
        jar.add(auth::session_cookie(token)),
        Json(json!({ "success": true })),
    ))
}

/// POST /logout - clear the session cookie by re-setting it with immediate
/// expiry. Purely client-side: no server-side revocation happens, so a copy
/// of the token extracted before logout remains valid until it expires.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    (
        jar.add(auth::logout_cookie()),
        Json(json!({ "success": true })),
    )
}
