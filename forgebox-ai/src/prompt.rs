/// Builds the single prompt sent to the remote model for one analyze call.
/// The model is instructed to reply with exactly one JSON object shaped
/// like [`forgebox_types::AnalysisReport`].
pub fn build_prompt(language: &str, code: &str) -> String {
    format!(
        "You are a senior {language} code reviewer and execution predictor.\n\
Analyze the following {language} code and respond with a single JSON object only, no prose before or after it.\n\
\n\
```{language}\n{code}\n```\n\
\n\
Respond with a JSON object with exactly this shape:\n\
{{\n  \"errors\": [{{\"line\": <int>, \"message\": <string>, \"severity\": \"error\"|\"warning\"|\"info\"}}],\n  \"suggestions\": [<string>],\n  \"optimizations\": [<string>],\n  \"output\": <string>,\n  \"quality_metrics\": {{\n    \"summary\": <string>,\n    \"complexity_issues\": [<string>],\n    \"security_issues\": [<string>],\n    \"recommendations\": [<string>],\n    \"security_analysis\": <string>\n  }}\n}}\n\
\n\
Instructions:\n\
1. Syntax and logic errors: point out every syntax or logic error you can find, with the best line number you can estimate and a clear message.\n\
2. Best practices: suggest concrete improvements to style, structure, and idiom for this language.\n\
3. Output prediction: predict exactly what this program would print if run, character for character. If it produces no output, say so explicitly. If it would error before printing anything, describe the error instead of guessing output.\n\
4. Quality metrics: write a short summary of overall code quality, list any complexity concerns, list any security concerns, give concrete recommendations, and write a short narrative security analysis even when no issues are found.\n\
\n\
Do not include cyclomatic_complexity, time_complexity, space_complexity, overall_score, or lines_of_code in quality_metrics — those are computed separately.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_the_language_and_code_verbatim() {
        let prompt = build_prompt("python", "print(1)");
        assert!(prompt.contains("python"));
        assert!(prompt.contains("print(1)"));
    }
}
