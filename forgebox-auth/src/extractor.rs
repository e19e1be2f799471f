use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;

use forgebox_common::Config;
use forgebox_store::{users, DB};

use crate::jwt::decode_token;

/// Resolves `Authorization: Bearer <token>` to the caller's user. Fails
/// `unauthorized` if the bearer is malformed, expired, carries no subject
/// claim, or references a missing/inactive user.
#[derive(Debug, Clone)]
pub struct Authed {
    pub user_id: i64,
    pub username: String,
}

impl<S> FromRequestParts<S> for Authed
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let db = parts
            .extensions
            .get::<DB>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "db extension missing"))?;
        let config = parts
            .extensions
            .get::<Config>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "config extension missing"))?;

        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "missing bearer token"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or((StatusCode::UNAUTHORIZED, "malformed authorization header"))?;

        let claims = decode_token(&config.secret_key, token)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "invalid or expired token"))?;

        let user = users::by_username(&db, &claims.sub)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "lookup failed"))?
            .ok_or((StatusCode::UNAUTHORIZED, "unknown user"))?;

        if !user.is_active {
            return Err((StatusCode::UNAUTHORIZED, "inactive user"));
        }

        Ok(Authed { user_id: user.id, username: user.username })
    }
}
