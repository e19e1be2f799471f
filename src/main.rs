use std::sync::Arc;
use std::time::Duration;

use forgebox_ai::AiClient;
use forgebox_common::Config;
use forgebox_orchestrator::Orchestrator;
use forgebox_sandbox::{sweep_stray_containers, BollardEngine, Executor};

const DEFAULT_AI_MODEL: &str = "gemini-1.5-flash";
const SWEEPER_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    forgebox_common::logs::init();

    let config = Config::from_env()?;
    let db = forgebox_store::connect(&config.database_url).await?;

    let engine = Arc::new(BollardEngine::connect().await?);
    let executor = Arc::new(Executor::new(engine.clone()));

    let ai = Arc::new(AiClient::new(
        config.gemini_api_key.clone(),
        DEFAULT_AI_MODEL,
        Duration::from_secs(20),
    ));

    let orchestrator = Arc::new(Orchestrator::new(
        executor,
        ai.clone(),
        db.clone(),
        Duration::from_secs(config.sandbox_timeout_secs),
    ));

    tokio::spawn({
        let engine = engine.clone();
        async move {
            let mut ticker = tokio::time::interval(SWEEPER_INTERVAL);
            loop {
                ticker.tick().await;
                sweep_stray_containers(engine.as_ref()).await;
            }
        }
    });

    let app = forgebox_api::build_router(db, config.clone(), ai, orchestrator);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "forgebox listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}
