//! Shared data types for the code-analysis pipeline: the supported
//! language set, the analysis report shape, and the sandbox run result.
//!
//! Kept dependency-light (serde only) so every other crate in the
//! workspace can depend on it without pulling in sqlx, axum, or the
//! provider HTTP client.

pub mod language;
pub mod report;

pub use language::{Language, UnsupportedLanguage};
pub use report::{AnalysisReport, ErrorItem, QualityMetrics, Severity};
