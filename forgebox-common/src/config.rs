use anyhow::Context;

/// Process-wide configuration, loaded once at startup from the environment.
///
/// `database_url` and `secret_key` are required; a missing value is a
/// startup-fatal error surfaced before the server binds. `gemini_api_key`
/// is optional: its absence is tolerated at startup and instead makes every
/// `/api/analyze` and `/api/debug/models` call fall back per the analysis
/// client's documented behavior.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub sandbox_timeout_secs: u64,
    pub jwt_expiry_minutes: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set")?;
        let secret_key = std::env::var("SECRET_KEY")
            .context("SECRET_KEY must be set")?;
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8000);

        let sandbox_timeout_secs = std::env::var("SANDBOX_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        let jwt_expiry_minutes = std::env::var("JWT_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Config {
            database_url,
            secret_key,
            gemini_api_key,
            port,
            sandbox_timeout_secs,
            jwt_expiry_minutes,
        })
    }
}
