//! Greedy line wrapping.

use crate::model::Line;

/// Split `text` into display lines of at most `max_chars` characters.
///
/// Paragraphs (separated by `\n`) are wrapped independently and a blank
/// paragraph yields exactly one blank line. Words are packed greedily; a word
/// longer than `max_chars` is hard-split at the limit and its remainder keeps
/// accumulating on the next line. Lengths count Unicode scalar values.
///
/// A `max_chars` of zero is treated as one.
pub fn wrap(text: &str, max_chars: usize) -> Vec<Line> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(Line::blank());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }

            if current_len > 0 {
                lines.push(Line::new(std::mem::take(&mut current)));
            }

            // Force-break the oversized word.
            while word_len > max_chars {
                let (chunk, rest) = split_at_char(word, max_chars);
                lines.push(Line::new(chunk));
                word = rest;
                word_len -= max_chars;
            }

            current.push_str(word);
            current_len = word_len;
        }

        if current_len > 0 {
            lines.push(Line::new(current));
        }
    }

    lines
}

/// Split `s` after its first `n` characters.
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let index = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap("Hello world", 80);
        assert_eq!(texts(&lines), vec!["Hello world"]);
        assert_eq!(lines[0].char_len(), 11);
    }

    #[test]
    fn test_greedy_packing() {
        let lines = wrap("aaa bbb ccc ddd", 7);
        assert_eq!(texts(&lines), vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_exact_fit() {
        let lines = wrap("abcd efg", 8);
        assert_eq!(texts(&lines), vec!["abcd efg"]);
    }

    #[test]
    fn test_long_token_hard_split() {
        let token = "x".repeat(200);
        let lines = wrap(&token, 80);
        let lengths: Vec<usize> = lines.iter().map(Line::char_len).collect();
        assert_eq!(lengths, vec![80, 80, 40]);
    }

    #[test]
    fn test_remainder_keeps_accumulating() {
        let lines = wrap("abcdefghij kl", 4);
        assert_eq!(texts(&lines), vec!["abcd", "efgh", "ij", "kl"]);

        let lines = wrap("abcdefg hi", 5);
        assert_eq!(texts(&lines), vec!["abcde", "fg hi"]);
    }

    #[test]
    fn test_long_token_after_words() {
        let lines = wrap("ab cdefghij", 4);
        assert_eq!(texts(&lines), vec!["ab", "cdef", "ghij"]);
    }

    #[test]
    fn test_blank_paragraphs_preserved() {
        let lines = wrap("first\n\n   \nsecond", 80);
        assert_eq!(texts(&lines), vec!["first", "", "", "second"]);
        assert!(lines[1].is_blank());
    }

    #[test]
    fn test_multibyte_counts_chars() {
        let word = "س".repeat(10);
        let lines = wrap(&word, 4);
        let lengths: Vec<usize> = lines.iter().map(Line::char_len).collect();
        assert_eq!(lengths, vec![4, 4, 2]);
    }

    #[test]
    fn test_no_line_exceeds_limit() {
        let text = "Lorem ipsum dolor sit amet, consecteturadipiscingelitseddoeiusmod \
                    tempor incididunt\n\nut labore et dolore magna aliqua.";
        for max in 1..30 {
            for line in wrap(text, max) {
                assert!(line.char_len() <= max, "{:?} exceeds {}", line.text, max);
            }
        }
    }

    #[test]
    fn test_zero_width_treated_as_one() {
        let lines = wrap("ab", 0);
        assert_eq!(texts(&lines), vec!["a", "b"]);
    }
}
