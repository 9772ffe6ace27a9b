use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Identity claim carried by the session token. The token is stateless and
/// never persisted server-side; logout only clears the client cookie, so a
/// copy extracted beforehand stays valid until natural expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        let ttl_days = config::config().security.session_ttl_days;
        Self {
            email,
            exp: (now + Duration::days(ttl_days)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT signing secret is not configured")]
    MissingSecret,

    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    #[error("invalid session token: {0}")]
    InvalidToken(String),
}

/// Sign an identity claim into a compact session token.
pub fn issue_token(claims: &Claims) -> Result<String, AuthError> {
    sign_with_secret(claims, &config::config().security.jwt_secret)
}

/// Verify a presented token's signature and expiration and recover the claim.
pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    verify_with_secret(token, &config::config().security.jwt_secret)
}

pub fn sign_with_secret(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

pub fn verify_with_secret(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

/// Build the session cookie for a freshly issued token.
///
/// In production the frontend lives on a different origin, so the cookie must
/// be cross-site (SameSite=None + Secure). Locally it stays strict.
pub fn session_cookie(token: String) -> Cookie<'static> {
    let ttl = time::Duration::days(config::config().security.session_ttl_days);
    build_cookie(token, ttl)
}

/// Build the cookie that clears an existing session: same attributes, empty
/// value, immediate expiry.
pub fn logout_cookie() -> Cookie<'static> {
    build_cookie(String::new(), time::Duration::ZERO)
}

fn build_cookie(value: String, max_age: time::Duration) -> Cookie<'static> {
    let config = config::config();
    let production = config.is_production();

    Cookie::build((config.security.cookie_name.clone(), value))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .max_age(max_age)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    fn fresh_claims(email: &str) -> Claims {
        let now = Utc::now();
        Claims {
            email: email.to_string(),
            exp: (now + Duration::days(365)).timestamp(),
            iat: now.timestamp(),
        }
    }

    #[test]
    fn sign_then_verify_round_trips_claim() {
        let claims = fresh_claims("alice@example.com");
        let token = sign_with_secret(&claims, SECRET).unwrap();
        let decoded = verify_with_secret(&token, SECRET).unwrap();
        assert_eq!(decoded.email, "alice@example.com");
        assert_eq!(decoded.exp, claims.exp);
        assert_eq!(decoded.iat, claims.iat);
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let token = sign_with_secret(&fresh_claims("alice@example.com"), SECRET).unwrap();

        // Flip a character in the signature segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let sig = parts.last_mut().unwrap();
        let flipped = if sig.ends_with('A') { "B" } else { "A" };
        sig.truncate(sig.len() - 1);
        sig.push_str(flipped);

        let tampered = parts.join(".");
        assert!(matches!(
            verify_with_secret(&tampered, SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn verify_rejects_token_signed_with_other_secret() {
        let token = sign_with_secret(&fresh_claims("alice@example.com"), "other").unwrap();
        assert!(matches!(
            verify_with_secret(&token, SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn verify_rejects_expired_token() {
        let now = Utc::now();
        let claims = Claims {
            email: "alice@example.com".to_string(),
            // Well past the default validation leeway
            exp: (now - Duration::days(2)).timestamp(),
            iat: (now - Duration::days(3)).timestamp(),
        };
        let token = sign_with_secret(&claims, SECRET).unwrap();
        assert!(matches!(
            verify_with_secret(&token, SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(matches!(
            verify_with_secret("not-a-jwt", SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(
            sign_with_secret(&fresh_claims("a@b.c"), ""),
            Err(AuthError::MissingSecret)
        ));
        assert!(matches!(
            verify_with_secret("whatever", ""),
            Err(AuthError::MissingSecret)
        ));
    }

    #[test]
    fn session_cookie_is_http_only() {
        crate::testing::init();
        let cookie = session_cookie("abc".to_string());
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn logout_cookie_expires_immediately() {
        crate::testing::init();
        let cookie = logout_cookie();
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.value(), "");
    }
}
