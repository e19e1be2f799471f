use crate::tokens::DATA_STRUCTURE_TOKENS;
use crate::util::count_occurrences;

pub fn estimate_space_complexity(code: &str) -> String {
    let lower = code.to_lowercase();
    let structure_count: usize = DATA_STRUCTURE_TOKENS
        .iter()
        .map(|token| count_occurrences(&lower, token))
        .sum();

    if structure_count > 2 {
        "O(n) – multiple".to_string()
    } else if structure_count > 0 {
        "O(n)".to_string()
    } else if count_occurrences(&lower, "return") > 1 {
        "O(log n) to O(n) – recursive stack".to_string()
    } else {
        "O(1)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_structures_no_recursion_is_constant() {
        assert_eq!(estimate_space_complexity("x = 1"), "O(1)");
    }

    #[test]
    fn single_list_is_linear() {
        assert_eq!(estimate_space_complexity("items = []"), "O(n)");
    }

    #[test]
    fn several_structures_reads_as_multiple() {
        assert_eq!(
            estimate_space_complexity("a = []\nb = {}\nc = list()\nd = dict()"),
            "O(n) – multiple"
        );
    }
}
