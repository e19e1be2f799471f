//! The HTTP surface: auth, analyze, submission history, and debug routes.
//! Handlers stay thin — business logic lives in `forgebox-auth`,
//! `forgebox-store`, and `forgebox-orchestrator`.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::build_router;
