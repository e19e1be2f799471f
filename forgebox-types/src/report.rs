use serde::{Deserialize, Serialize};

/// The structured value returned by `/api/analyze` and persisted alongside
/// every submission. Every analyze response, success or failure, conforms
/// to this shape so callers never need to branch on status to parse a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub errors: Vec<ErrorItem>,
    pub suggestions: Vec<String>,
    pub optimizations: Vec<String>,
    pub output: String,
    pub code_output: String,
    pub execution_success: bool,
    pub quality_metrics: QualityMetrics,
}

impl AnalysisReport {
    /// A report carrying no AI/sandbox signal at all, used as the seed for
    /// merging and as the basis for catch-all fallback responses.
    pub fn empty() -> Self {
        AnalysisReport {
            errors: Vec::new(),
            suggestions: Vec::new(),
            optimizations: Vec::new(),
            output: String::new(),
            code_output: String::new(),
            execution_success: false,
            quality_metrics: QualityMetrics::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorItem {
    pub line: u32,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub cyclomatic_complexity: f64,
    pub time_complexity: String,
    pub space_complexity: String,
    pub overall_score: i32,
    pub lines_of_code: u32,
    pub summary: String,
    pub complexity_issues: Vec<String>,
    pub security_issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub security_analysis: String,
}

impl Default for QualityMetrics {
    fn default() -> Self {
        QualityMetrics {
            cyclomatic_complexity: 0.0,
            time_complexity: "O(1)".to_string(),
            space_complexity: "O(1) - Constant space".to_string(),
            overall_score: 0,
            lines_of_code: 0,
            summary: "Quality analysis completed".to_string(),
            complexity_issues: Vec::new(),
            security_issues: Vec::new(),
            recommendations: Vec::new(),
            security_analysis: "No security issues detected".to_string(),
        }
    }
}
