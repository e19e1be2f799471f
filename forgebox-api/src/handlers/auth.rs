use axum::extract::Extension;
use axum::Json;

use forgebox_auth::{encode_token, hash_password, verify_password, Authed};
use forgebox_common::{Config, Error, JsonResult};
use forgebox_store::models::UserView;
use forgebox_store::{users, DB};

use crate::dto::{LoginRequest, SignupRequest, TokenResponse};

pub async fn signup(
    Extension(db): Extension<DB>,
    Extension(config): Extension<Config>,
    Json(req): Json<SignupRequest>,
) -> JsonResult<TokenResponse> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    if username.trim().is_empty() || password.is_empty() {
        return Err(Error::BadRequest("username and password are required".to_string()));
    }

    if users::by_username(&db, &username)
        .await
        .map_err(forgebox_common::to_anyhow)?
        .is_some()
    {
        return Err(Error::BadRequest("username already registered".to_string()));
    }

    if let Some(email) = req.email.as_deref() {
        if users::by_email(&db, email)
            .await
            .map_err(forgebox_common::to_anyhow)?
            .is_some()
        {
            return Err(Error::BadRequest("email already registered".to_string()));
        }
    }

    let hashed = hash_password(&password)
        .map_err(|e| Error::InternalErr(format!("failed to hash password: {e}")))?;

    let user = users::create(&db, &username, &hashed, req.email.as_deref(), req.full_name.as_deref())
        .await
        .map_err(forgebox_common::to_anyhow)?;

    let access_token = encode_token(&config.secret_key, &user.username, config.jwt_expiry_minutes)
        .map_err(|e| Error::InternalErr(format!("failed to mint token: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        user: UserView::from(&user),
    }))
}

pub async fn login(
    Extension(db): Extension<DB>,
    Extension(config): Extension<Config>,
    Json(req): Json<LoginRequest>,
) -> JsonResult<TokenResponse> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = users::by_username(&db, &username)
        .await
        .map_err(forgebox_common::to_anyhow)?
        .ok_or_else(|| Error::Unauthorized("invalid username or password".to_string()))?;

    if !user.is_active || !verify_password(&password, &user.hashed_password) {
        return Err(Error::Unauthorized("invalid username or password".to_string()));
    }

    let mut tx = db.begin().await.map_err(forgebox_common::to_anyhow)?;
    users::bump_last_login(&mut tx, user.id)
        .await
        .map_err(forgebox_common::to_anyhow)?;

    let access_token = encode_token(&config.secret_key, &user.username, config.jwt_expiry_minutes)
        .map_err(|e| Error::InternalErr(format!("failed to mint token: {e}")))?;

    tx.commit().await.map_err(forgebox_common::to_anyhow)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        user: UserView::from(&user),
    }))
}

pub async fn me(Extension(db): Extension<DB>, authed: Authed) -> JsonResult<UserView> {
    let user = users::by_id(&db, authed.user_id)
        .await
        .map_err(forgebox_common::to_anyhow)?
        .ok_or_else(|| Error::Unauthorized("unknown user".to_string()))?;

    Ok(Json(UserView::from(&user)))
}
