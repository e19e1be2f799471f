pub mod blob;
pub mod models;
pub mod submissions;
pub mod users;

pub type DB = sqlx::PgPool;

/// Connects and runs embedded migrations. Called once at process startup;
/// nothing else in the workspace opens a second pool against the same URL.
pub async fn connect(database_url: &str) -> anyhow::Result<DB> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}
