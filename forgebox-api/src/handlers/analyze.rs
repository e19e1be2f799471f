use std::sync::Arc;

use axum::extract::Extension;
use axum::Json;

use forgebox_auth::Authed;
use forgebox_common::{Error, JsonResult};
use forgebox_sandbox::BollardEngine;
use forgebox_types::{AnalysisReport, Language};

use crate::dto::AnalyzeRequest;

pub async fn analyze(
    Extension(orchestrator): Extension<Arc<forgebox_orchestrator::Orchestrator<BollardEngine>>>,
    authed: Authed,
    Json(req): Json<AnalyzeRequest>,
) -> JsonResult<AnalysisReport> {
    let code = req.code.unwrap_or_default();
    let language_str = req
        .language
        .ok_or_else(|| Error::BadRequest("language is required".to_string()))?;

    if code.trim().is_empty() {
        return Err(Error::BadRequest("code must not be empty".to_string()));
    }
    let language: Language = language_str
        .parse()
        .map_err(|e: forgebox_types::UnsupportedLanguage| Error::BadRequest(e.to_string()))?;

    let report = orchestrator
        .analyze(authed.user_id, language, &code, req.file_name.as_deref())
        .await;

    Ok(Json(report))
}
