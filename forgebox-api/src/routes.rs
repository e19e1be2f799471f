use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use forgebox_ai::AiClient;
use forgebox_common::Config;
use forgebox_orchestrator::Orchestrator;
use forgebox_sandbox::BollardEngine;
use forgebox_store::DB;

use crate::handlers::{analyze, auth, debug, index, submissions};

/// Wires every route to its handler and layers in the shared dependencies
/// handlers and the `Authed` extractor both pull from request extensions.
pub fn build_router(
    db: DB,
    config: Config,
    ai: Arc<AiClient>,
    orchestrator: Arc<Orchestrator<BollardEngine>>,
) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/api/debug/ping", get(debug::ping))
        .route("/api/debug/models", get(debug::models))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/api/analyze", post(analyze::analyze))
        .route("/api/submissions", get(submissions::list))
        .route("/api/submissions/{id}", get(submissions::get))
        .layer(Extension(db))
        .layer(Extension(config))
        .layer(Extension(ai))
        .layer(Extension(orchestrator))
        .layer(TraceLayer::new_for_http())
}
