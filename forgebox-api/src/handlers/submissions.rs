use axum::extract::{Extension, Path};
use axum::Json;

use forgebox_auth::Authed;
use forgebox_common::{Error, JsonResult};
use forgebox_store::{blob, submissions, DB};

use crate::dto::{SubmissionDetailDto, SubmissionSummaryDto, SubmissionsResponse};

fn default_file_name(language: &str) -> String {
    format!("submission.{language}")
}

pub async fn list(
    Extension(db): Extension<DB>,
    authed: Authed,
) -> JsonResult<SubmissionsResponse> {
    let rows = submissions::list_by_user(&db, authed.user_id)
        .await
        .map_err(forgebox_common::to_anyhow)?;

    let submissions = rows
        .into_iter()
        .map(|row| SubmissionSummaryDto {
            id: row.id,
            file_name: row.file_name.clone().unwrap_or_else(|| default_file_name(&row.language)),
            language: row.language,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(SubmissionsResponse { submissions }))
}

pub async fn get(
    Extension(db): Extension<DB>,
    authed: Authed,
    Path(id): Path<i64>,
) -> JsonResult<SubmissionDetailDto> {
    let submission = submissions::by_id_and_user(&db, id, authed.user_id)
        .await
        .map_err(forgebox_common::to_anyhow)?
        .ok_or_else(|| Error::NotFound("submission not found".to_string()))?;

    let code = match blob::read(&submission.file_path).await {
        Ok(content) => content,
        Err(_) => "Code file not found".to_string(),
    };

    let analysis_result = submission
        .analysis_result
        .as_deref()
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_else(|| serde_json::json!({"error": "Failed to parse analysis result"}));

    Ok(Json(SubmissionDetailDto {
        id: submission.id,
        file_name: submission
            .file_name
            .clone()
            .unwrap_or_else(|| default_file_name(&submission.language)),
        language: submission.language,
        code,
        analysis_result,
        created_at: submission.created_at,
    }))
}
