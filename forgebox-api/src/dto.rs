use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forgebox_store::models::UserView;

/// Fields that are required by the spec but optional here so that a body
/// missing the key deserializes successfully and reaches the handler's own
/// `bad_request` check, rather than axum's `Json<T>` rejection turning a
/// missing field into an unconditional `422` the spec never asked for.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserView,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub api_provider: &'static str,
    pub count: usize,
    pub models: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionsResponse {
    pub submissions: Vec<SubmissionSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionSummaryDto {
    pub id: i64,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionDetailDto {
    pub id: i64,
    pub language: String,
    pub code: String,
    pub analysis_result: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub file_name: String,
}
