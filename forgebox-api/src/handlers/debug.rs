use std::sync::Arc;

use axum::extract::Extension;
use axum::Json;

use forgebox_ai::AiClient;
use forgebox_common::{Error, JsonResult};

use crate::dto::{ModelsResponse, PingResponse};

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { ok: true })
}

pub async fn models(Extension(ai): Extension<Arc<AiClient>>) -> JsonResult<ModelsResponse> {
    let catalogue = ai
        .list_models()
        .await
        .map_err(|e| Error::InternalErr(e.to_string()))?;

    let models: Vec<String> = catalogue.models.into_iter().map(|m| m.name).collect();
    Ok(Json(ModelsResponse { api_provider: "gemini", count: models.len(), models }))
}
