use chrono::Utc;

use crate::models::User;
use crate::DB;

pub async fn create(
    db: &DB,
    username: &str,
    hashed_password: &str,
    email: Option<&str>,
    full_name: Option<&str>,
) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, hashed_password, email, full_name, is_active, created_at) \
         VALUES ($1, $2, $3, $4, TRUE, now()) \
         RETURNING id, username, email, hashed_password, full_name, is_active, created_at, last_login",
    )
    .bind(username)
    .bind(hashed_password)
    .bind(email)
    .bind(full_name)
    .fetch_one(db)
    .await
}

pub async fn by_username(db: &DB, username: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, hashed_password, full_name, is_active, created_at, last_login \
         FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(db)
    .await
}

pub async fn by_email(db: &DB, email: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, hashed_password, full_name, is_active, created_at, last_login \
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(db)
    .await
}

pub async fn by_id(db: &DB, id: i64) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, hashed_password, full_name, is_active, created_at, last_login \
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Bumps `last_login` inside the caller's transaction so the update lands
/// atomically with whatever minted the bearer token.
pub async fn bump_last_login(tx: &mut sqlx::PgConnection, user_id: i64) -> sqlx::Result<()> {
    sqlx::query("UPDATE users SET last_login = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(user_id)
        .execute(tx)
        .await?;
    Ok(())
}
