use forgebox_types::Language;

use crate::tokens::loop_tokens;
use crate::util::count_occurrences;

pub fn estimate_time_complexity(language: Language, code: &str) -> String {
    let lower = code.to_lowercase();
    let loop_count: usize = loop_tokens(language)
        .iter()
        .map(|token| count_occurrences(&lower, token))
        .sum();

    if loop_count >= 3 {
        "O(n³) or higher".to_string()
    } else if loop_count == 2 {
        "O(n²)".to_string()
    } else if loop_count == 1 {
        "O(n)".to_string()
    } else if count_occurrences(&lower, "return") > 1 {
        "O(log n) to O(n) – recursive".to_string()
    } else {
        "O(1)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_loops_no_recursion_is_constant() {
        assert_eq!(estimate_time_complexity(Language::Python, "x = 1"), "O(1)");
    }

    #[test]
    fn single_loop_is_linear() {
        assert_eq!(
            estimate_time_complexity(Language::Python, "for i in range(10):\n  pass"),
            "O(n)"
        );
    }

    #[test]
    fn nested_loops_are_quadratic() {
        let code = "for i in range(n):\n  for j in range(n):\n    pass";
        assert_eq!(estimate_time_complexity(Language::Python, code), "O(n²)");
    }

    #[test]
    fn multiple_returns_without_loops_reads_as_recursive() {
        let code = "def f(n):\n  if n == 0:\n    return 1\n  return n * f(n - 1)";
        assert_eq!(
            estimate_time_complexity(Language::Python, code),
            "O(log n) to O(n) – recursive"
        );
    }
}
