use forgebox_sandbox::{ErrorKind as SandboxErrorKind, RunResult};
use forgebox_types::{AnalysisReport, ErrorItem, Severity};

/// Describes a sandbox failure in the vocabulary the errors list already
/// uses, so timeouts and docker-unavailability read like any other
/// reported error rather than a distinct response shape.
fn describe_failure(result: &RunResult) -> String {
    match result.error_kind {
        Some(SandboxErrorKind::Timeout) => {
            format!("Execution timed out after {}s.", result.duration.as_secs())
        }
        Some(SandboxErrorKind::DockerUnavailable) => {
            "The execution sandbox is currently unavailable.".to_string()
        }
        Some(SandboxErrorKind::ImageUnavailable) => {
            "The execution environment for this language could not be prepared.".to_string()
        }
        Some(SandboxErrorKind::ContainerError) | None => {
            if result.stderr.is_empty() {
                format!("Program exited with status {}.", result.exit_code)
            } else {
                result.stderr.clone()
            }
        }
        Some(SandboxErrorKind::Internal) => {
            "An internal error occurred while running this code.".to_string()
        }
    }
}

/// Merges the AI report, the complexity metrics, and the sandbox result
/// into the single report returned to the caller. The AI report is the
/// base; complexity overwrites its own fields; the sandbox result supplies
/// execution output and, on failure, an errors-list entry.
pub fn merge(
    mut ai_report: AnalysisReport,
    complexity: forgebox_complexity::ComplexityMetrics,
    sandbox: RunResult,
) -> AnalysisReport {
    ai_report.quality_metrics.cyclomatic_complexity = complexity.cyclomatic_complexity as f64;
    ai_report.quality_metrics.time_complexity = complexity.time_complexity;
    ai_report.quality_metrics.space_complexity = complexity.space_complexity;
    ai_report.quality_metrics.overall_score = complexity.overall_score;
    ai_report.quality_metrics.lines_of_code = complexity.lines_of_code;

    let succeeded = sandbox.exit_code == 0 && sandbox.error_kind.is_none();
    ai_report.execution_success = succeeded;
    ai_report.code_output = if succeeded { sandbox.stdout.clone() } else { sandbox.stderr.clone() };

    if !succeeded {
        ai_report.errors.insert(
            0,
            ErrorItem { line: 1, message: describe_failure(&sandbox), severity: Severity::Error },
        );
    }

    ai_report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn complexity() -> forgebox_complexity::ComplexityMetrics {
        forgebox_complexity::ComplexityMetrics {
            cyclomatic_complexity: 1,
            time_complexity: "O(1)".to_string(),
            space_complexity: "O(1)".to_string(),
            overall_score: 95,
            lines_of_code: 1,
        }
    }

    #[test]
    fn successful_run_reports_stdout_and_no_errors() {
        let sandbox = RunResult {
            stdout: "hi".to_string(),
            stderr: String::new(),
            exit_code: 0,
            duration: Duration::from_millis(10),
            error_kind: None,
        };
        let merged = merge(AnalysisReport::empty(), complexity(), sandbox);
        assert!(merged.execution_success);
        assert_eq!(merged.code_output, "hi");
        assert!(merged.errors.is_empty());
    }

    #[test]
    fn timeout_is_reported_as_an_error_entry_not_a_hard_failure() {
        let sandbox = RunResult::timeout(Duration::from_secs(15));
        let merged = merge(AnalysisReport::empty(), complexity(), sandbox);
        assert!(!merged.execution_success);
        assert_eq!(merged.errors.len(), 1);
        assert!(merged.errors[0].message.contains("timed out"));
    }
}
