use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use forgebox_types::AnalysisReport;

/// The one error type every component crate returns. Variants line up with
/// the kinds, not type names, of the error taxonomy: a `bad_request` kind
/// is always this enum's `BadRequest` variant, never a bespoke type per
/// crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("sandbox timed out: {0}")]
    SandboxTimeout(String),
    #[error("sandbox container error: {0}")]
    SandboxContainerError(String),
    #[error("sandbox unavailable: {0}")]
    SandboxUnavailable(String),
    #[error("analysis provider error: {0}")]
    AnalysisProviderError(String),
    #[error("analysis blocked: {0}")]
    AnalysisBlocked(String),
    #[error("persistence error: {0}")]
    PersistenceError(String),
    #[error("internal error: {0}")]
    InternalErr(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type JsonResult<T, E = Error> = std::result::Result<Json<T>, E>;

/// Bridges a foreign error (sqlx, bollard, reqwest, jsonwebtoken, ...) into
/// `anyhow::Error` at a call site that needs to keep propagating with `?`
/// before the caller wraps it back into `Error::InternalErr`.
pub fn to_anyhow<E: std::error::Error + Send + Sync + 'static>(e: E) -> anyhow::Error {
    anyhow::Error::new(e)
}

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Error::InternalErr(e.to_string())
    }
}

#[derive(Serialize)]
struct SimpleError {
    error: String,
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::SandboxTimeout(_)
            | Error::SandboxContainerError(_)
            | Error::SandboxUnavailable(_)
            | Error::AnalysisProviderError(_)
            | Error::AnalysisBlocked(_)
            | Error::PersistenceError(_)
            | Error::InternalErr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Every `internal` response still validates against the analysis-report
    /// shape, so a client polling `/api/analyze` never has to branch on
    /// status to parse the body.
    fn report_shaped_body(&self) -> AnalysisReport {
        let mut report = AnalysisReport::empty();
        report.output = "Analysis error".to_string();
        report.quality_metrics.summary = self.to_string();
        report.errors.push(forgebox_types::ErrorItem {
            line: 1,
            message: self.to_string(),
            severity: forgebox_types::Severity::Error,
        });
        report
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Error::InternalErr(_) => (status, Json(self.report_shaped_body())).into_response(),
            other => (
                status,
                Json(SimpleError { error: other.to_string() }),
            )
                .into_response(),
        }
    }
}
