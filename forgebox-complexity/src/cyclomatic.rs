use forgebox_types::Language;

use crate::tokens::cyclomatic_tokens;
use crate::util::count_occurrences;

/// Script-level cyclomatic complexity: base 1 plus one per occurrence of
/// any control-flow token for the language. There is no function-level
/// breakdown, so this single number stands in for both the average and
/// the max complexity a caller needs.
pub fn cyclomatic_complexity(language: Language, code: &str) -> u32 {
    let lower = code.to_lowercase();
    let added: usize = cyclomatic_tokens(language)
        .iter()
        .map(|token| count_occurrences(&lower, token))
        .sum();
    1 + added as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_script_has_base_complexity_one() {
        assert_eq!(cyclomatic_complexity(Language::Python, "print('hello')"), 1);
    }

    #[test]
    fn nested_conditionals_add_up() {
        let code = "if x:\n  if y:\n    for z in range(10):\n      while True:\n        break\n";
        // if, if, for, while, break = 5 tokens -> 1 + 5
        assert_eq!(cyclomatic_complexity(Language::Python, code), 6);
    }

    #[test]
    fn brace_language_bracket_tokens_are_counted() {
        let code = "if (x) { for (;;) { } } while (y) {}";
        assert_eq!(cyclomatic_complexity(Language::Java, code), 1 + 3);
    }
}
