use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use forgebox_types::Language;

use crate::engine::{ContainerEngine, RunSpec};
use crate::recipe::{network_disabled, recipe_for};
use crate::result::{ErrorKind, RunResult};

/// Every container this executor starts carries this prefix in its name,
/// so the sweeper (`sweep_stray_containers`) can recognize ones it owns
/// without tracking them itself.
pub const CONTAINER_NAME_PREFIX: &str = "forgebox-sandbox-";

/// `Idle -> Preparing -> Pulling? -> Running -> (Exited | Killed) -> Cleaned`.
/// `Pulling` is only reached on an image cache miss. Every path through
/// `execute` ends in `Cleaned`: the temp directory is torn down on every
/// exit, success or failure, and the container itself is always removed
/// explicitly, whether it exited on its own or was force-killed.
pub struct Executor<E: ContainerEngine> {
    engine: Arc<E>,
}

impl<E: ContainerEngine> Executor<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Executor { engine }
    }

    pub async fn execute(&self, language: Language, source: &str, timeout: Duration) -> RunResult {
        let recipe = recipe_for(language);
        let start = Instant::now();

        let temp_dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => return RunResult::internal(format!("failed to create temp dir: {e}"), start.elapsed()),
        };

        let file_path = temp_dir.path().join(recipe.filename);
        if let Err(e) = tokio::fs::write(&file_path, source.as_bytes()).await {
            return RunResult::internal(format!("failed to write source: {e}"), start.elapsed());
        }

        // Preparing -> Pulling?
        match self.engine.image_exists(recipe.image).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::info!(image = recipe.image, "pulling docker image");
                if let Err(e) = self.engine.pull_image(recipe.image).await {
                    return RunResult::image_unavailable(format!(
                        "failed to pull image {}: {e}",
                        recipe.image
                    ));
                }
            }
            Err(e) => return RunResult::unavailable(format!("docker not reachable: {e}")),
        }

        // Running
        let name = format!("{}{}", CONTAINER_NAME_PREFIX, Uuid::new_v4());
        let spec = RunSpec {
            image: recipe.image,
            command: recipe.command,
            host_dir: temp_dir.path(),
            working_dir: "/workspace",
            network_disabled: network_disabled(language),
            name,
        };

        let container_id = match self.engine.run_detached(spec).await {
            Ok(id) => id,
            Err(e) => return RunResult::internal(format!("failed to start container: {e}"), start.elapsed()),
        };

        let result = self.await_completion(&container_id, timeout, start).await;
        // Cleaned: temp_dir drops here regardless of outcome above.
        result
    }

    async fn await_completion(
        &self,
        container_id: &str,
        timeout: Duration,
        start: Instant,
    ) -> RunResult {
        match self.engine.wait(container_id, timeout).await {
            Ok(exit_code) => {
                tracing::info!(exit_code, "container finished");
                let logs = self.engine.logs(container_id).await.unwrap_or_default();
                let _ = self.engine.remove(container_id).await;

                let (stdout, stderr) = if exit_code == 0 {
                    (logs.trim().to_string(), String::new())
                } else {
                    (String::new(), logs.trim().to_string())
                };

                RunResult {
                    stdout,
                    stderr,
                    exit_code,
                    duration: start.elapsed(),
                    error_kind: if exit_code == 0 { None } else { Some(ErrorKind::ContainerError) },
                }
            }
            Err(e) if e.downcast_ref::<tokio::time::error::Elapsed>().is_some() => {
                tracing::warn!("container wait timed out, killing");
                if let Err(kill_err) = self.engine.kill(container_id).await {
                    tracing::warn!(error = %kill_err, "failed to kill container");
                }
                let _ = self.engine.remove(container_id).await;
                RunResult::timeout(timeout)
            }
            Err(e) => {
                tracing::warn!(error = %e, "container wait failed");
                let _ = self.engine.remove(container_id).await;
                RunResult::internal(format!("container wait failed: {e}"), start.elapsed())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;

    enum WaitBehavior {
        Exit(i64),
        Timeout,
        EngineError,
    }

    struct FakeEngine {
        wait_behavior: WaitBehavior,
        killed: AtomicBool,
    }

    #[async_trait]
    impl ContainerEngine for FakeEngine {
        async fn image_exists(&self, _image: &str) -> anyhow::Result<bool> {
            Ok(true)
        }

        async fn pull_image(&self, _image: &str) -> anyhow::Result<()> {
            Ok(())
        }

        async fn run_detached(&self, _spec: RunSpec<'_>) -> anyhow::Result<String> {
            Ok("fake-container".to_string())
        }

        async fn wait(&self, _container_id: &str, _timeout: Duration) -> anyhow::Result<i64> {
            match &self.wait_behavior {
                WaitBehavior::Exit(code) => Ok(*code),
                WaitBehavior::Timeout => {
                    let elapsed = tokio::time::timeout(Duration::from_millis(0), std::future::pending::<()>())
                        .await
                        .unwrap_err();
                    Err(elapsed.into())
                }
                WaitBehavior::EngineError => Err(anyhow::anyhow!("container not found")),
            }
        }

        async fn kill(&self, _container_id: &str) -> anyhow::Result<()> {
            self.killed.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn logs(&self, _container_id: &str) -> anyhow::Result<String> {
            Ok("hi".to_string())
        }

        async fn remove(&self, _container_id: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn genuine_timeout_kills_the_container_and_reports_timeout() {
        let engine = Arc::new(FakeEngine { wait_behavior: WaitBehavior::Timeout, killed: AtomicBool::new(false) });
        let executor = Executor::new(engine.clone());

        let result = executor.execute(Language::Python, "print(1)", Duration::from_millis(50)).await;

        assert_eq!(result.exit_code, 124);
        assert_eq!(result.error_kind, Some(ErrorKind::Timeout));
        assert!(engine.killed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn engine_level_wait_failure_is_reported_as_internal_not_timeout() {
        let engine = Arc::new(FakeEngine { wait_behavior: WaitBehavior::EngineError, killed: AtomicBool::new(false) });
        let executor = Executor::new(engine.clone());

        let result = executor.execute(Language::Python, "print(1)", Duration::from_millis(50)).await;

        assert_eq!(result.error_kind, Some(ErrorKind::Internal));
        assert_ne!(result.exit_code, 124);
        assert!(!engine.killed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn clean_exit_is_reported_as_success_with_stdout() {
        let engine = Arc::new(FakeEngine { wait_behavior: WaitBehavior::Exit(0), killed: AtomicBool::new(false) });
        let executor = Executor::new(engine);

        let result = executor.execute(Language::Python, "print(1)", Duration::from_secs(5)).await;

        assert_eq!(result.exit_code, 0);
        assert!(result.error_kind.is_none());
        assert_eq!(result.stdout, "hi");
    }
}
