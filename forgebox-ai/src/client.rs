use std::time::Duration;

use forgebox_types::{AnalysisReport, Language};
use tracing::warn;

use crate::parse::{classify_finish_reason, extract_json_block, fallback_report, FinishKind};
use crate::prompt::build_prompt;
use crate::wire::{Content, GenerateRequest, GenerateResponse, GenerationConfig, ListModelsResponse, Part};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct ModelSummary {
    pub name: String,
}

pub struct ModelCatalogue {
    pub models: Vec<ModelSummary>,
}

/// Talks to the remote generative-AI provider. Constructed once at process
/// startup; missing `api_key` is tolerated (every call then falls back per
/// [`crate::parse::fallback_report`] or fails the debug-models call, never
/// the analyze call).
pub struct AiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl AiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client builds with a static configuration");
        AiClient { http, api_key, model: model.into() }
    }

    /// Best-effort quality analysis: every failure mode (missing key,
    /// transport error, safety block, unparseable text) resolves to a
    /// fallback `AnalysisReport` rather than an `Err`. Analysis is
    /// optional signal on top of the sandbox run, never a hard dependency.
    pub async fn analyze(&self, language: Language, code: &str) -> AnalysisReport {
        let Some(api_key) = &self.api_key else {
            return fallback_report(FinishKind::Other, Some("provider not configured"));
        };

        let prompt = build_prompt(language.as_str(), code);
        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            generation_config: GenerationConfig::default(),
        };

        let url = format!("{API_BASE}/models/{}:generateContent?key={}", self.model, api_key);
        let response = match self.http.post(&url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "analysis_provider_error");
                return fallback_report(FinishKind::Other, Some("analysis_provider_error"));
            }
        };

        let body: GenerateResponse = match response.error_for_status() {
            Ok(resp) => match resp.json().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "analysis_provider_error: malformed response body");
                    return fallback_report(FinishKind::Other, Some("analysis_provider_error"));
                }
            },
            Err(e) => {
                warn!(error = %e, "analysis_provider_error: non-success status");
                return fallback_report(FinishKind::Other, Some("analysis_provider_error"));
            }
        };

        let Some(candidate) = body.candidates.into_iter().next() else {
            return fallback_report(FinishKind::NoCandidate, None);
        };

        let kind = classify_finish_reason(candidate.finish_reason.as_deref());
        if kind != FinishKind::Stop {
            return fallback_report(kind, candidate.finish_reason.as_deref());
        }

        let Some(content) = candidate.content else {
            return fallback_report(FinishKind::NoCandidate, None);
        };
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        let json_text = extract_json_block(&text);

        match crate::parse::parse_and_backfill(json_text, code) {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "failed to parse model response as JSON");
                let mut report = AnalysisReport::empty();
                report.output = crate::parse::heuristic_output_fallback(code);
                report
            }
        }
    }

    /// Enumerates the provider's model catalogue, filtered to models that
    /// support content generation. Used only by the debug-models route —
    /// never on the analyze hot path.
    pub async fn list_models(&self) -> anyhow::Result<ModelCatalogue> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no provider API key configured"))?;

        let url = format!("{API_BASE}/models?key={api_key}");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: ListModelsResponse = response.json().await?;

        let models = body
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| ModelSummary { name: m.name })
            .collect();

        Ok(ModelCatalogue { models })
    }
}
