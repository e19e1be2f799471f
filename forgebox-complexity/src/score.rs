/// Weighted-deduction score over the already-computed metrics. Mirrors the
/// reference implementation's elif-chain of penalties rather than a
/// weighted sum, including its string-contains checks against the
/// time-complexity label instead of a parsed complexity class.
pub fn overall_score(
    avg_complexity: u32,
    max_complexity: u32,
    lines_of_code: u32,
    time_complexity: &str,
    total_functions: u32,
) -> i32 {
    let mut score: i32 = 100;
    let time_lower = time_complexity.to_lowercase();

    if avg_complexity > 10 {
        score -= 30;
    } else if avg_complexity > 5 {
        score -= 15;
    } else if avg_complexity > 3 {
        score -= 5;
    }

    if max_complexity > 15 {
        score -= 25;
    } else if max_complexity > 10 {
        score -= 15;
    } else if max_complexity > 5 {
        score -= 5;
    }

    if lines_of_code > 200 {
        score -= 15;
    } else if lines_of_code > 100 {
        score -= 10;
    } else if lines_of_code > 50 {
        score -= 5;
    }

    if time_lower.contains("o(n³)") || time_lower.contains("higher") {
        score -= 20;
    } else if time_lower.contains("o(n²)") {
        score -= 10;
    } else if time_lower.contains("o(n)") && !time_lower.contains("nested") {
        score -= 5;
    }

    if total_functions > 0 && avg_complexity <= 3 {
        score += 5;
    }
    if lines_of_code > 0 && lines_of_code <= 50 {
        score += 5;
    }

    score.clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_script_scores_high() {
        let score = overall_score(1, 1, 1, "O(1)", 0);
        assert!(score >= 90, "got {score}");
    }

    #[test]
    fn heavily_penalized_script_bottoms_out_low() {
        let score = overall_score(50, 50, 1000, "O(n³) or higher", 0);
        assert_eq!(score, 10);
    }

    #[test]
    fn short_script_gets_the_small_script_bonus() {
        let with_bonus = overall_score(1, 1, 10, "O(1)", 0);
        let without_bonus = overall_score(1, 1, 60, "O(1)", 0);
        assert!(with_bonus > without_bonus);
    }
}
