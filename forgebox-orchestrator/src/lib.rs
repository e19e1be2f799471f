//! Drives the sandbox executor, the AI analysis client, and the
//! complexity analyzer concurrently for one analyze request, merges their
//! outputs, and persists the result.

mod merge;

use std::sync::Arc;
use std::time::Duration;

use forgebox_ai::AiClient;
use forgebox_sandbox::{ContainerEngine, Executor};
use forgebox_store::DB;
use forgebox_types::{AnalysisReport, Language};
use tracing::warn;

pub struct Orchestrator<E: ContainerEngine> {
    executor: Arc<Executor<E>>,
    ai: Arc<AiClient>,
    db: DB,
    sandbox_timeout: Duration,
}

impl<E: ContainerEngine> Orchestrator<E> {
    pub fn new(executor: Arc<Executor<E>>, ai: Arc<AiClient>, db: DB, sandbox_timeout: Duration) -> Self {
        Orchestrator { executor, ai, db, sandbox_timeout }
    }

    /// Runs one analyze request end to end: execute, analyze, and score
    /// concurrently, merge, persist (logging but not failing on a
    /// persistence error), then return the merged report.
    pub async fn analyze(
        &self,
        user_id: i64,
        language: Language,
        code: &str,
        file_name: Option<&str>,
    ) -> AnalysisReport {
        let (sandbox_result, ai_report) = tokio::join!(
            self.executor.execute(language, code, self.sandbox_timeout),
            self.ai.analyze(language, code),
        );
        let complexity = forgebox_complexity::analyze(language, code);

        let merged = merge::merge(ai_report, complexity, sandbox_result);

        let analysis_json = serde_json::to_string(&merged)
            .unwrap_or_else(|_| "{\"error\":\"failed to serialize analysis\"}".to_string());

        if let Err(e) = forgebox_store::blob::persist_submission(
            &self.db,
            user_id,
            language.as_str(),
            language.extension(),
            code,
            file_name,
            &analysis_json,
        )
        .await
        {
            warn!(error = %e, user_id, "failed to persist submission, returning analysis anyway");
        }

        merged
    }
}
