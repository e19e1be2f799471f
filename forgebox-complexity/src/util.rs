/// Non-overlapping substring count, mirroring `str.count` in the reference
/// implementation. `text` is expected to already be lowercased by the
/// caller when the token itself is lowercase.
pub fn count_occurrences(text: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    text.matches(token).count()
}

pub fn lines_of_code(code: &str) -> u32 {
    code.lines().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_non_overlapping_occurrences() {
        assert_eq!(count_occurrences("ababab", "ab"), 3);
    }

    #[test]
    fn counts_lines_without_a_trailing_newline() {
        assert_eq!(lines_of_code("a\nb\nc"), 3);
    }
}
