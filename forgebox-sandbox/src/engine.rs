use std::path::Path;

use async_trait::async_trait;

/// The small surface the executor needs from a container engine. Any
/// engine satisfying this (local daemon, rootless runtime, remote
/// builder) can back the sandbox — higher layers never bind to a
/// concrete SDK.
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    async fn image_exists(&self, image: &str) -> anyhow::Result<bool>;
    async fn pull_image(&self, image: &str) -> anyhow::Result<()>;

    async fn run_detached(&self, spec: RunSpec<'_>) -> anyhow::Result<String>;

    /// Waits for the container to exit. `Ok(exit_code)` on completion. On
    /// timeout the error downcasts to `tokio::time::error::Elapsed`, which
    /// lets the caller tell a genuine timeout (kill the container) apart
    /// from any other engine-level wait failure (container already gone,
    /// daemon error — nothing left to kill).
    async fn wait(&self, container_id: &str, timeout: std::time::Duration) -> anyhow::Result<i64>;

    async fn kill(&self, container_id: &str) -> anyhow::Result<()>;
    async fn logs(&self, container_id: &str) -> anyhow::Result<String>;
    async fn remove(&self, container_id: &str) -> anyhow::Result<()>;
}

pub struct RunSpec<'a> {
    pub image: &'a str,
    pub command: &'a [&'a str],
    pub host_dir: &'a Path,
    pub working_dir: &'a str,
    pub network_disabled: bool,
    pub name: String,
}
