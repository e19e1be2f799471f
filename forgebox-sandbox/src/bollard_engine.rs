use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bollard::container::{
    Config as ContainerConfig, CreateContainerOptions, KillContainerOptions, ListContainersOptions,
    LogsOptions, RemoveContainerOptions, WaitContainerOptions,
};
use bollard::image::CreateImageOptions;
use bollard::models::HostConfig;
use bollard::Docker;
use futures::StreamExt;

use crate::engine::{ContainerEngine, RunSpec};
use crate::executor::CONTAINER_NAME_PREFIX;

const MEMORY_LIMIT_BYTES: i64 = 128 * 1024 * 1024;
const CPU_PERIOD_MICROS: i64 = 100_000;
const CPU_QUOTA_MICROS: i64 = 50_000;

pub struct BollardEngine {
    docker: Docker,
}

impl BollardEngine {
    /// Builds the local-daemon client. Constructing the client itself
    /// practically never fails (it only parses the local socket address);
    /// a daemon that's actually down is instead surfaced per-call through
    /// `image_exists`/`run_detached`/etc, so the caller pings once here
    /// only to log a startup warning, never to fail construction — the
    /// rest of the process must still serve auth/history routes while
    /// every analyze call reports `docker_unavailable`.
    pub async fn connect() -> anyhow::Result<Self> {
        let docker = Docker::connect_with_local_defaults()?;
        if let Err(e) = docker.ping().await {
            tracing::warn!(error = %e, "docker daemon not reachable at startup");
        }
        Ok(BollardEngine { docker })
    }
}

/// Defensive cleanup only: in the steady state, the executor's own
/// explicit remove on every exit path already guarantees nothing leaks.
/// Lists every exited container whose name carries the sandbox's prefix
/// and removes it, swallowing per-container failures so one stray
/// container can't stop the sweep of the rest.
pub async fn sweep_stray_containers(engine: &BollardEngine) {
    let mut filters = HashMap::new();
    filters.insert("name".to_string(), vec![CONTAINER_NAME_PREFIX.to_string()]);
    filters.insert("status".to_string(), vec!["exited".to_string()]);

    let options = ListContainersOptions { all: true, filters, ..Default::default() };

    let containers = match engine.docker.list_containers(Some(options)).await {
        Ok(containers) => containers,
        Err(e) => {
            tracing::warn!(error = %e, "failed to list containers during sweep");
            return;
        }
    };

    for container in containers {
        let Some(id) = container.id else { continue };
        let options = RemoveContainerOptions { force: true, ..Default::default() };
        if let Err(e) = engine.docker.remove_container(&id, Some(options)).await {
            tracing::warn!(error = %e, container_id = %id, "failed to remove stray container");
        } else {
            tracing::info!(container_id = %id, "swept stray container");
        }
    }
}

#[async_trait]
impl ContainerEngine for BollardEngine {
    async fn image_exists(&self, image: &str) -> anyhow::Result<bool> {
        Ok(self.docker.inspect_image(image).await.is_ok())
    }

    async fn pull_image(&self, image: &str) -> anyhow::Result<()> {
        let options = CreateImageOptions { from_image: image, ..Default::default() };
        let mut stream = self.docker.create_image(Some(options), None, None);
        while let Some(progress) = stream.next().await {
            progress?;
        }
        Ok(())
    }

    async fn run_detached(&self, spec: RunSpec<'_>) -> anyhow::Result<String> {
        let host_dir = spec.host_dir.to_string_lossy().into_owned();
        let binds = vec![format!("{}:{}:rw", host_dir, spec.working_dir)];

        let host_config = HostConfig {
            binds: Some(binds),
            memory: Some(MEMORY_LIMIT_BYTES),
            cpu_period: Some(CPU_PERIOD_MICROS),
            cpu_quota: Some(CPU_QUOTA_MICROS),
            // Left off deliberately: the daemon would otherwise be free to
            // reap the container as soon as it exits, and for a fast
            // program that can happen before `wait`'s subscription request
            // reaches the daemon, turning a clean exit into a 404. Removal
            // is instead always explicit, after logs have been read.
            auto_remove: Some(false),
            ..Default::default()
        };

        let config = ContainerConfig {
            image: Some(spec.image.to_string()),
            cmd: Some(spec.command.iter().map(|s| s.to_string()).collect()),
            working_dir: Some(spec.working_dir.to_string()),
            user: Some("nobody".to_string()),
            network_disabled: Some(spec.network_disabled),
            host_config: Some(host_config),
            ..Default::default()
        };

        let options = CreateContainerOptions { name: spec.name.clone(), platform: None };
        let created = self.docker.create_container(Some(options), config).await?;
        self.docker
            .start_container::<String>(&created.id, None)
            .await?;
        Ok(created.id)
    }

    async fn wait(&self, container_id: &str, timeout: Duration) -> anyhow::Result<i64> {
        let mut stream = self
            .docker
            .wait_container(container_id, Some(WaitContainerOptions { condition: "not-running" }));

        match tokio::time::timeout(timeout, stream.next()).await? {
            Some(Ok(r)) => Ok(r.status_code),
            Some(Err(e)) => Err(e.into()),
            None => Err(anyhow::anyhow!("wait stream closed before exit")),
        }
    }

    async fn kill(&self, container_id: &str) -> anyhow::Result<()> {
        self.docker
            .kill_container(container_id, None::<KillContainerOptions<String>>)
            .await?;
        Ok(())
    }

    async fn logs(&self, container_id: &str) -> anyhow::Result<String> {
        let options = LogsOptions::<String> {
            stdout: true,
            stderr: true,
            follow: false,
            ..Default::default()
        };
        let mut stream = self.docker.logs(container_id, Some(options));
        let mut combined = Vec::new();
        while let Some(chunk) = stream.next().await {
            combined.extend_from_slice(&chunk?.into_bytes());
        }
        Ok(String::from_utf8_lossy(&combined).into_owned())
    }

    async fn remove(&self, container_id: &str) -> anyhow::Result<()> {
        // Containers are started with auto_remove disabled, so every exit
        // path (normal completion, container error, kill-on-timeout) must
        // reach here explicitly. Treat "already gone" as success so a
        // second remove (e.g. after a kill that raced the daemon's own
        // teardown) is harmless.
        let options = RemoveContainerOptions { force: true, ..Default::default() };
        match self.docker.remove_container(container_id, Some(options)).await {
            Ok(()) => Ok(()),
            Err(bollard::errors::Error::DockerResponseServerError { status_code: 404, .. }) => {
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
