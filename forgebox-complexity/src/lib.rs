//! Pure, synchronous static-analysis heuristics over a source string: no
//! I/O, no parsing beyond substring matching, language-dispatched via
//! [`forgebox_types::Language`].

mod cyclomatic;
mod score;
mod space_complexity;
mod time_complexity;
mod tokens;
mod util;

pub use cyclomatic::cyclomatic_complexity;
pub use score::overall_score;
pub use space_complexity::estimate_space_complexity;
pub use time_complexity::estimate_time_complexity;
pub use util::lines_of_code;

use forgebox_types::Language;

/// The subset of `quality_metrics` this analyzer is authoritative over.
/// The orchestrator overwrites these fields on top of whatever the AI
/// client produced; everything else in `quality_metrics` comes from the
/// AI report untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityMetrics {
    pub cyclomatic_complexity: u32,
    pub time_complexity: String,
    pub space_complexity: String,
    pub overall_score: i32,
    pub lines_of_code: u32,
}

/// There is no function-level breakdown (see `DESIGN.md`), so the single
/// script-level cyclomatic value stands in for both average and max, and
/// `total_functions` is reported as 0 to the score formula.
pub fn analyze(language: Language, code: &str) -> ComplexityMetrics {
    let complexity = cyclomatic_complexity(language, code);
    let time = estimate_time_complexity(language, code);
    let space = estimate_space_complexity(code);
    let loc = lines_of_code(code);
    let score = overall_score(complexity, complexity, loc, &time, 0);

    ComplexityMetrics {
        cyclomatic_complexity: complexity,
        time_complexity: time,
        space_complexity: space,
        overall_score: score,
        lines_of_code: loc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_scores_in_the_high_nineties() {
        let metrics = analyze(Language::Python, "print('Hello, World!')");
        assert_eq!(metrics.lines_of_code, 1);
        assert!(metrics.overall_score >= 90, "got {}", metrics.overall_score);
        assert_eq!(metrics.time_complexity, "O(1)");
        assert_eq!(metrics.space_complexity, "O(1)");
    }

    #[test]
    fn nested_loop_script_is_penalized() {
        let code = "for i in range(n):\n  for j in range(n):\n    print(i * j)";
        let metrics = analyze(Language::Python, code);
        assert_eq!(metrics.time_complexity, "O(n²)");
    }
}
