use forgebox_types::{AnalysisReport, ErrorItem, QualityMetrics, Severity};
use regex::Regex;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishKind {
    Stop,
    Safety,
    Recitation,
    Other,
    NoCandidate,
}

pub fn classify_finish_reason(reason: Option<&str>) -> FinishKind {
    match reason.map(|r| r.to_uppercase()) {
        None => FinishKind::Stop,
        Some(r) if r == "STOP" => FinishKind::Stop,
        Some(r) if r == "SAFETY" => FinishKind::Safety,
        Some(r) if r == "RECITATION" => FinishKind::Recitation,
        Some(_) => FinishKind::Other,
    }
}

/// A benign, best-effort report for every case where the provider didn't
/// give us usable text: no candidate at all, or a finish reason other
/// than normal completion. Never propagated as an error — analysis is
/// best-effort by design.
pub fn fallback_report(kind: FinishKind, reason: Option<&str>) -> AnalysisReport {
    let mut report = AnalysisReport::empty();
    report.output = match kind {
        FinishKind::NoCandidate => "No response was generated for this code.".to_string(),
        FinishKind::Safety => "Analysis was blocked by the provider's safety filters.".to_string(),
        FinishKind::Recitation => {
            "Analysis was blocked due to a recitation concern.".to_string()
        }
        FinishKind::Other => format!(
            "Analysis could not be completed (finish reason: {}).",
            reason.unwrap_or("unknown")
        ),
        FinishKind::Stop => unreachable!("Stop is the success path, not a fallback"),
    };
    report.suggestions = vec!["No suggestions available due to analysis failure.".to_string()];
    report.optimizations = vec!["No optimizations available due to analysis failure.".to_string()];
    report
}

/// Heuristic stand-in for `output` when the model's text couldn't be
/// parsed as JSON at all. Checked in this order: explicit output
/// statements, then loop-like control flow, then give up.
pub fn heuristic_output_fallback(code: &str) -> String {
    let lower = code.to_lowercase();
    if lower.contains("print") || lower.contains("console.log") {
        "code contains output statements but prediction failed".to_string()
    } else if lower.contains("for") || lower.contains("while") || lower.contains("loop") {
        "code contains loops but output prediction failed".to_string()
    } else {
        "unable to predict output".to_string()
    }
}

fn fenced_json_regex() -> Regex {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("static regex is valid")
}

/// Pulls the JSON payload out of the model's free-text response: prefers
/// a fenced code block (```json or plain ```), falls back to the whole
/// text when no fence is present.
pub fn extract_json_block(text: &str) -> &str {
    let re = fenced_json_regex();
    match re.captures(text) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(text).trim(),
        None => text.trim(),
    }
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    match value.and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn string_or(value: Option<&Value>, default: &str) -> String {
    value.and_then(Value::as_str).unwrap_or(default).to_string()
}

fn parse_errors(value: Option<&Value>) -> Vec<ErrorItem> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| ErrorItem {
            line: item
                .get("line")
                .and_then(Value::as_u64)
                .map(|n| n as u32)
                .unwrap_or(1),
            message: item
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string(),
            severity: match item.get("severity").and_then(Value::as_str) {
                Some("warning") => Severity::Warning,
                Some("info") => Severity::Info,
                _ => Severity::Error,
            },
        })
        .collect()
}

/// Parses the extracted JSON text into an [`AnalysisReport`], backfilling
/// every field the model's response left out or shaped wrong with the
/// documented default rather than failing the whole analysis.
pub fn parse_and_backfill(json_text: &str, code: &str) -> Result<AnalysisReport, serde_json::Error> {
    let value: Value = serde_json::from_str(json_text)?;

    let suggestions = match string_array(value.get("suggestions")) {
        s if s.is_empty() => vec!["No specific suggestions provided.".to_string()],
        s => s,
    };
    let optimizations = match string_array(value.get("optimizations")) {
        o if o.is_empty() => vec!["No specific optimizations identified.".to_string()],
        o => o,
    };
    let output = match value.get("output").and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => heuristic_output_fallback(code),
    };

    let qm = value.get("quality_metrics");
    let quality_metrics = QualityMetrics {
        summary: string_or(qm.and_then(|q| q.get("summary")), "Quality analysis completed"),
        complexity_issues: string_array(qm.and_then(|q| q.get("complexity_issues"))),
        security_issues: string_array(qm.and_then(|q| q.get("security_issues"))),
        recommendations: string_array(qm.and_then(|q| q.get("recommendations"))),
        security_analysis: string_or(
            qm.and_then(|q| q.get("security_analysis")),
            "No security issues detected",
        ),
        ..QualityMetrics::default()
    };

    Ok(AnalysisReport {
        errors: parse_errors(value.get("errors")),
        suggestions,
        optimizations,
        output,
        code_output: String::new(),
        execution_success: false,
        quality_metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_json_fenced_block() {
        let text = "here you go:\n```json\n{\"output\": \"hi\"}\n```\nthanks";
        assert_eq!(extract_json_block(text), "{\"output\": \"hi\"}");
    }

    #[test]
    fn falls_back_to_whole_text_without_a_fence() {
        let text = "  {\"output\": \"hi\"}  ";
        assert_eq!(extract_json_block(text), "{\"output\": \"hi\"}");
    }

    #[test]
    fn backfills_missing_fields_with_documented_defaults() {
        let report = parse_and_backfill("{}", "print('hi')").unwrap();
        assert_eq!(report.quality_metrics.summary, "Quality analysis completed");
        assert_eq!(
            report.quality_metrics.security_analysis,
            "No security issues detected"
        );
        assert_eq!(report.output, "code contains output statements but prediction failed");
    }

    #[test]
    fn heuristic_prefers_output_statements_over_loops() {
        let code = "for i in range(10): print(i)";
        assert_eq!(
            heuristic_output_fallback(code),
            "code contains output statements but prediction failed"
        );
    }

    #[test]
    fn heuristic_falls_back_to_loop_detection() {
        let code = "for i in range(10): pass";
        assert_eq!(
            heuristic_output_fallback(code),
            "code contains loops but output prediction failed"
        );
    }

    #[test]
    fn classifies_known_finish_reasons() {
        assert_eq!(classify_finish_reason(Some("SAFETY")), FinishKind::Safety);
        assert_eq!(classify_finish_reason(Some("RECITATION")), FinishKind::Recitation);
        assert_eq!(classify_finish_reason(Some("STOP")), FinishKind::Stop);
        assert_eq!(classify_finish_reason(Some("MAX_TOKENS")), FinishKind::Other);
        assert_eq!(classify_finish_reason(None), FinishKind::Stop);
    }
}
